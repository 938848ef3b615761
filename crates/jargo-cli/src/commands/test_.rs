//! Test command implementation.

use miette::Result;

use jargo_core::manifest::Manifest;
use jargo_ops::ops_test::TestOperation;
use jargo_util::errors::JargoError;

pub fn exec(args: &[String]) -> Result<()> {
    let cwd = std::env::current_dir().map_err(JargoError::Io)?;
    let project_root = jargo_util::fs::find_project_root(&cwd).ok_or_else(|| {
        JargoError::Manifest {
            message: "Could not find Jargo.toml in current or parent directories".to_string(),
        }
    })?;
    let manifest = Manifest::from_path(&project_root.join(jargo_util::MANIFEST_FILE))?;

    TestOperation::from_manifest(&manifest, &project_root)?
        .test_tool_options(args.iter().cloned())
        .execute()
}
