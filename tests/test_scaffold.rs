//! Integration tests for the packaging scaffold written around generator
//! output, exercised on real temp directories.

use std::fs;

use adogen::scaffold::{copy_tree, write_index, write_package_files, PackageMeta};

fn fake_generator_output(root: &std::path::Path) {
    fs::create_dir_all(root.join("apis")).unwrap();
    fs::create_dir_all(root.join("models")).unwrap();
    fs::write(root.join("apis/BuildApi.ts"), "export class BuildApi {}").unwrap();
    fs::write(root.join("models/Build.ts"), "export interface Build {}").unwrap();
    fs::write(root.join("runtime.ts"), "export class Configuration {}").unwrap();
    fs::write(root.join("index.ts"), "// generator default index").unwrap();
}

#[test]
fn test_full_scaffold_around_generator_output() {
    let generated = tempfile::tempdir().unwrap();
    fake_generator_output(generated.path());

    let out = tempfile::tempdir().unwrap();
    let pkg_root = out.path().join("build");
    copy_tree(generated.path(), &pkg_root.join("src")).unwrap();
    write_index(&pkg_root.join("src")).unwrap();

    let meta = PackageMeta {
        api: "build",
        api_version: "7.1",
        git_ref: "master",
        scope: Some("@myorg"),
        pkg_version: "1.2.3",
    };
    write_package_files(&pkg_root, &meta).unwrap();

    // Generator output was copied, nested dirs included.
    assert!(pkg_root.join("src/apis/BuildApi.ts").is_file());
    assert!(pkg_root.join("src/models/Build.ts").is_file());

    // The synthesized index replaced the generator's one.
    let index = fs::read_to_string(pkg_root.join("src/index.ts")).unwrap();
    assert_eq!(
        index,
        "export * from './apis';\nexport * from './models';\nexport * from './runtime';\n"
    );

    // Manifest fields.
    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(pkg_root.join("package.json")).unwrap()).unwrap();
    assert_eq!(manifest["name"], "@myorg/build");
    assert_eq!(manifest["version"], "1.2.3");
    assert_eq!(manifest["type"], "module");
    assert_eq!(manifest["main"], "dist/index.js");
    assert_eq!(manifest["types"], "dist/index.d.ts");
    assert_eq!(manifest["scripts"]["build"], "tsc");
    let description = manifest["description"].as_str().unwrap();
    assert!(description.contains("build"));
    assert!(description.contains("7.1"));
    assert!(description.contains("master"));

    // Compiler config is valid JSON with the expected layout.
    let tsconfig: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(pkg_root.join("tsconfig.json")).unwrap()).unwrap();
    assert_eq!(tsconfig["compilerOptions"]["rootDir"], "src");
    assert_eq!(tsconfig["compilerOptions"]["outDir"], "dist");

    let readme = fs::read_to_string(pkg_root.join("README.md")).unwrap();
    assert!(readme.starts_with("# @myorg/build"));
}

#[test]
fn test_scaffold_without_scope_uses_api_name() {
    let out = tempfile::tempdir().unwrap();
    let pkg_root = out.path().join("git");
    let meta = PackageMeta {
        api: "git",
        api_version: "7.2-preview",
        git_ref: "master",
        scope: None,
        pkg_version: "0.1.0",
    };
    write_package_files(&pkg_root, &meta).unwrap();

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(pkg_root.join("package.json")).unwrap()).unwrap();
    assert_eq!(manifest["name"], "git");
    assert_eq!(manifest["version"], "0.1.0");
}

#[test]
fn test_index_comment_for_unrecognized_output() {
    let generated = tempfile::tempdir().unwrap();
    fs::write(generated.path().join("something_else.ts"), "export {};").unwrap();

    write_index(generated.path()).unwrap();
    let index = fs::read_to_string(generated.path().join("index.ts")).unwrap();
    assert_eq!(index, "// No known generator entrypoint found in this output.\n");
}
