use crate::domain::models::ModuleReport;
use anyhow::{bail, Context};
use std::fs;
use std::path::{Path, PathBuf};

const RESOURCES_DIR: &str = "tools/module-generator/resources";
const SOURCE_DIR: &str = "source";
const PLACEHOLDER: &str = "%ModuleName%";

/// Template file name -> subdirectory of the module it lands in.
/// The first `Module` in the file name becomes the module name.
const TEMPLATES: [(&str, &str); 3] = [
    ("Module.Build.cs", ""),
    ("ModuleLogging.h", "Private"),
    ("ModuleModule.cpp", "Private"),
];

fn instantiate_template(
    resources: &Path,
    module_dir: &Path,
    module_name: &str,
    template: &str,
    subdir: &str,
) -> anyhow::Result<PathBuf> {
    let input = resources.join(template);
    let contents = fs::read_to_string(&input)
        .with_context(|| format!("unable to read template {}", input.display()))?;

    let out_name = template.replacen("Module", module_name, 1);
    let out_path = module_dir.join(subdir).join(out_name);
    fs::write(&out_path, contents.replace(PLACEHOLDER, module_name))
        .with_context(|| format!("unable to write {}", out_path.display()))?;
    Ok(out_path)
}

/// The single `.uproject` in the root is the project descriptor.
fn find_project_file(root: &Path) -> anyhow::Result<PathBuf> {
    let mut candidates: Vec<PathBuf> = fs::read_dir(root)
        .with_context(|| format!("unable to read project root {}", root.display()))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().map(|x| x == "uproject").unwrap_or(false))
        .collect();
    candidates.sort();
    match candidates.first() {
        Some(p) => Ok(p.clone()),
        None => bail!("no .uproject file found in {}", root.display()),
    }
}

fn register_module(project_file: &Path, module_name: &str) -> anyhow::Result<()> {
    let raw = fs::read_to_string(project_file)
        .with_context(|| format!("unable to read {}", project_file.display()))?;
    let mut descriptor: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("invalid project descriptor {}", project_file.display()))?;

    if descriptor.get("Modules").is_none() {
        descriptor["Modules"] = serde_json::Value::Array(vec![]);
    }
    let modules = descriptor
        .get_mut("Modules")
        .and_then(|m| m.as_array_mut())
        .ok_or_else(|| anyhow::anyhow!("Modules is not an array in {}", project_file.display()))?;
    modules.push(serde_json::json!({
        "Name": module_name,
        "Type": "Runtime",
        "LoadingPhase": "Default",
        "AdditionalDependencies": ["Engine"]
    }));

    fs::write(project_file, serde_json::to_string_pretty(&descriptor)?)
        .with_context(|| format!("unable to rewrite {}", project_file.display()))?;
    Ok(())
}

/// Creates `source/<name>/{Private,Public}`, instantiates the module
/// templates, and appends the module to the project descriptor.
pub fn create_module(root: &Path, module_name: &str) -> anyhow::Result<ModuleReport> {
    let resources = root.join(RESOURCES_DIR);
    if !resources.is_dir() {
        bail!("template directory not found: {}", resources.display());
    }
    let project_file = find_project_file(root)?;

    let module_dir = root.join(SOURCE_DIR).join(module_name);
    fs::create_dir_all(module_dir.join("Private"))?;
    fs::create_dir_all(module_dir.join("Public"))?;

    let mut created = Vec::new();
    for (template, subdir) in TEMPLATES {
        let path = instantiate_template(&resources, &module_dir, module_name, template, subdir)?;
        created.push(path.display().to_string());
    }

    register_module(&project_file, module_name)?;

    Ok(ModuleReport {
        module: module_name.to_string(),
        created,
        project_file: project_file.display().to_string(),
    })
}
