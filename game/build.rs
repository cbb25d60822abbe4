use std::env;
use std::fs;
use std::path::Path;

fn main() {
    embed_levels();
}

fn collect_levels(dir: &Path, levels: &mut Vec<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|e| e == "csv")
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
        {
            levels.push(stem.to_string());
            println!("cargo:rerun-if-changed={}", path.display());
            let json_path = path.with_extension("json");
            if json_path.exists() {
                println!("cargo:rerun-if-changed={}", json_path.display());
            }
        }
    }
}

fn embed_levels() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("levels.rs");

    let levels_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../levels");

    println!("cargo:rerun-if-changed={}", levels_dir.display());

    let mut levels: Vec<String> = Vec::new();
    collect_levels(&levels_dir, &mut levels);

    // File names decide level order.
    levels.sort();

    let mut code = String::new();
    code.push_str("pub(crate) static LEVEL_DATA: &[(&str, &str, &str)] = &[\n");

    for name in &levels {
        let rel_csv = format!("../levels/{}.csv", name);
        let rel_json = format!("../levels/{}.json", name);

        code.push_str(&format!(
            "    ({:?}, include_str!(concat!(env!(\"CARGO_MANIFEST_DIR\"), \"/{rel_csv}\")), include_str!(concat!(env!(\"CARGO_MANIFEST_DIR\"), \"/{rel_json}\"))),\n",
            name
        ));
    }

    code.push_str("];\n");

    // Only write if content changed to avoid unnecessary recompilation
    let should_write = match fs::read_to_string(&dest_path) {
        Ok(existing) => existing != code,
        Err(_) => true,
    };
    if should_write {
        fs::write(&dest_path, code).unwrap();
    }
}
