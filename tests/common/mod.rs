use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const NOTICE: &str = "Copyright MyCorp 2024. All Rights Reserved.";

/// Temporary Unreal-project-shaped fixture tree driven through the real
/// binary.
pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("project");
        fs::create_dir_all(root.join("config")).expect("create config dir");
        fs::create_dir_all(root.join("source")).expect("create source dir");
        fs::write(
            root.join("config/DefaultGame.ini"),
            format!(
                "[/Script/EngineSettings.GeneralProjectSettings]\n\
                 ProjectName=Fixture\n\
                 CopyrightNotice={NOTICE}\n"
            ),
        )
        .expect("write game config");
        Self { _tmp: tmp, root }
    }

    /// A fixture without `config/DefaultGame.ini`, for fatal-path tests.
    pub fn without_config() -> Self {
        let env = Self::new();
        fs::remove_file(env.root.join("config/DefaultGame.ini")).expect("drop game config");
        env
    }

    pub fn write_source(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.root.join("source").join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create source subdir");
        }
        fs::write(&path, contents).expect("write source file");
        path
    }

    pub fn read_source(&self, rel: &str) -> String {
        fs::read_to_string(self.root.join("source").join(rel)).expect("read source file")
    }

    /// Installs the module templates and a minimal project descriptor.
    pub fn with_module_fixtures(self) -> Self {
        let resources = self.root.join("tools/module-generator/resources");
        fs::create_dir_all(&resources).expect("create template dir");
        fs::write(
            resources.join("Module.Build.cs"),
            "using UnrealBuildTool;\n\npublic class %ModuleName% : ModuleRules\n{\n}\n",
        )
        .expect("write build template");
        fs::write(
            resources.join("ModuleLogging.h"),
            "#pragma once\n\nDECLARE_LOG_CATEGORY_EXTERN(Log%ModuleName%, Display, All);\n",
        )
        .expect("write logging template");
        fs::write(
            resources.join("ModuleModule.cpp"),
            "IMPLEMENT_MODULE(FDefaultModuleImpl, %ModuleName%);\n",
        )
        .expect("write module template");
        fs::write(
            self.root.join("Fixture.uproject"),
            serde_json::json!({
                "FileVersion": 3,
                "Modules": [{"Name": "Core", "Type": "Runtime"}]
            })
            .to_string(),
        )
        .expect("write project descriptor");
        self
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("uedev").expect("binary under test");
        cmd.arg("--root").arg(&self.root);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}
