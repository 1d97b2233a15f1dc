// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The init, serve, deploy, and update actions.
//!
//! Each action checks its preconditions in order and stops at the first
//! failure, before anything is spawned or written.

use crate::descriptor::{AppDescriptor, ApplicationPrompt};
use crate::error::{Result, TailboneError};
use crate::process::{CommandRunner, CLOUD_SDK_HINT, GIT_HINT};
use console::{style, Term};
use std::ffi::OsStr;

use super::layout::{Project, CHECKOUT_DIR};
use super::scaffold::ScaffoldReport;

impl Project {
    /// Add the template as the `tailbone` submodule and write starter files.
    pub fn init(&self, runner: &dyn CommandRunner) -> Result<ScaffoldReport> {
        if self.is_initialized() {
            return Err(TailboneError::AlreadyInitialized);
        }
        if !self.is_git_repo() {
            return Err(TailboneError::NotAGitRepo);
        }

        let template = &self.config().template;
        let args = vec![
            "submodule".to_string(),
            "add".to_string(),
            "-b".to_string(),
            template.branch.clone(),
            template.url.clone(),
        ];

        let code = runner
            .run(OsStr::new(&self.config().tools.git), &args, self.root())
            .map_err(|e| TailboneError::SubmoduleCheckoutFailed {
                message: e.to_string(),
            })?;
        if code != Some(0) {
            tracing::debug!("git submodule add exited with {:?}", code);
        }

        Ok(self.scaffold())
    }

    /// Run the local app server on the checkout.
    ///
    /// `args` are passed through ahead of the checkout directory.
    pub fn serve(&self, runner: &dyn CommandRunner, args: &[String]) -> Result<()> {
        self.require_initialized()?;
        let app_server = &self.config().tools.app_server;
        let program = self.locator().require(app_server, CLOUD_SDK_HINT)?;

        let mut server_args = args.to_vec();
        server_args.push(CHECKOUT_DIR.to_string());

        self.spawn(runner, program.as_os_str(), &server_args)
    }

    /// Stamp `version` into app.yaml and upload the checkout.
    pub fn deploy(
        &self,
        runner: &dyn CommandRunner,
        prompt: &dyn ApplicationPrompt,
        version: Option<&str>,
    ) -> Result<()> {
        self.require_initialized()?;
        if !self.has_descriptor() {
            return Err(TailboneError::MissingAppDescriptor);
        }
        let deployer = &self.config().tools.deployer;
        let program = self.locator().require(deployer, CLOUD_SDK_HINT)?;
        let version = match version {
            Some(v) if !v.is_empty() => v,
            _ => return Err(TailboneError::MissingVersionArgument),
        };

        let path = self.descriptor_path();
        let mut descriptor = AppDescriptor::load(&path)?;

        if descriptor.has_default_application()? {
            let id = prompt.application_id()?;
            descriptor.set_application(&id)?;
        }
        descriptor.set_version(version)?;
        descriptor.save(&path)?;
        tracing::debug!("Wrote {:?} for version {}", path, version);

        println!("{}", version);

        let args = vec![
            "update".to_string(),
            "--oauth2".to_string(),
            CHECKOUT_DIR.to_string(),
        ];
        self.spawn(runner, program.as_os_str(), &args)
    }

    /// Check that an update could run. Updating is still manual.
    pub fn update(&self) -> Result<()> {
        self.require_initialized()?;
        let git = &self.config().tools.git;
        self.locator().require(git, GIT_HINT)?;

        let term = Term::stderr();
        term.write_line(&format!(
            "{}",
            style("Update doesn't work yet do this manually by updating the git submodule tailbone.")
                .yellow()
        ))?;

        Ok(())
    }

    fn spawn(&self, runner: &dyn CommandRunner, program: &OsStr, args: &[String]) -> Result<()> {
        let code = runner.run(program, args, self.root()).map_err(|e| {
            TailboneError::SpawnFailed {
                command: program.to_string_lossy().into_owned(),
                message: e.to_string(),
            }
        })?;

        if code != Some(0) {
            tracing::debug!("{:?} exited with {:?}", program, code);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TailboneConfig;
    use crate::process::ToolLocator;
    use std::cell::{Cell, RefCell};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const TEMPLATE: &str = "application: your-application-id\nversion: old\nruntime: python27\n";

    /// Records every command instead of running it.
    #[derive(Default)]
    struct RecordingRunner {
        calls: RefCell<Vec<(String, Vec<String>)>>,
        fail: bool,
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, program: &OsStr, args: &[String], _cwd: &Path) -> Result<Option<i32>> {
            if self.fail {
                return Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no such file").into());
            }
            self.calls
                .borrow_mut()
                .push((program.to_string_lossy().into_owned(), args.to_vec()));
            Ok(Some(1))
        }
    }

    struct FixedPrompt {
        id: &'static str,
        asked: Cell<usize>,
    }

    impl FixedPrompt {
        fn new(id: &'static str) -> Self {
            Self { id, asked: Cell::new(0) }
        }
    }

    impl ApplicationPrompt for FixedPrompt {
        fn application_id(&self) -> Result<String> {
            self.asked.set(self.asked.get() + 1);
            if crate::descriptor::is_valid_application_id(self.id) {
                Ok(self.id.to_string())
            } else {
                Err(TailboneError::InvalidApplicationId {
                    id: self.id.to_string(),
                })
            }
        }
    }

    /// A project in a temp dir whose tools live in `<tmp>/bin`.
    fn project_with_tools(tools: &[&str]) -> (TempDir, Project) {
        let dir = TempDir::new().unwrap();
        let bin = dir.path().join("bin");
        fs::create_dir(&bin).unwrap();
        for tool in tools {
            let path = bin.join(tool);
            fs::write(&path, "#!/bin/sh\n").unwrap();
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            }
        }
        let project = Project::new(dir.path(), TailboneConfig::default())
            .with_locator(ToolLocator::with_search_path(&bin));
        (dir, project)
    }

    fn initialized(tools: &[&str], descriptor: Option<&str>) -> (TempDir, Project) {
        let (dir, project) = project_with_tools(tools);
        fs::create_dir(dir.path().join("tailbone")).unwrap();
        if let Some(content) = descriptor {
            fs::write(dir.path().join("app.yaml"), content).unwrap();
        }
        (dir, project)
    }

    #[test]
    fn test_init_requires_git_repo() {
        let (_dir, project) = project_with_tools(&[]);
        let runner = RecordingRunner::default();

        let err = project.init(&runner).unwrap_err();
        assert!(matches!(err, TailboneError::NotAGitRepo));
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_init_adds_submodule_once() {
        let (dir, project) = project_with_tools(&[]);
        fs::create_dir(dir.path().join(".git")).unwrap();
        let runner = RecordingRunner::default();

        let report = project.init(&runner).unwrap();

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "git");
        assert_eq!(
            calls[0].1,
            vec![
                "submodule",
                "add",
                "-b",
                "reorg",
                "https://github.com/doug/tailbone.git"
            ]
        );
        assert!(report.index_created);
        assert!(dir.path().join("app/index.html").exists());
    }

    #[test]
    fn test_init_twice_is_already_initialized() {
        let (dir, project) = project_with_tools(&[]);
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join("tailbone"), "").unwrap();
        let runner = RecordingRunner::default();

        let err = project.init(&runner).unwrap_err();
        assert!(matches!(err, TailboneError::AlreadyInitialized));
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_init_spawn_failure() {
        let (dir, project) = project_with_tools(&[]);
        fs::create_dir(dir.path().join(".git")).unwrap();
        let runner = RecordingRunner {
            fail: true,
            ..Default::default()
        };

        let err = project.init(&runner).unwrap_err();
        assert!(matches!(err, TailboneError::SubmoduleCheckoutFailed { .. }));
        assert!(!dir.path().join("app/index.html").exists());
    }

    #[test]
    fn test_not_initialized_is_checked_first() {
        let (_dir, project) = project_with_tools(&[]);
        let runner = RecordingRunner::default();
        let prompt = FixedPrompt::new("my-app-123");

        assert!(matches!(
            project.serve(&runner, &[]),
            Err(TailboneError::NotInitialized)
        ));
        assert!(matches!(
            project.deploy(&runner, &prompt, None),
            Err(TailboneError::NotInitialized)
        ));
        assert!(matches!(project.update(), Err(TailboneError::NotInitialized)));
    }

    #[cfg(unix)]
    #[test]
    fn test_serve_passes_arguments_through() {
        let (dir, project) = initialized(&["dev_appserver.py"], None);
        let runner = RecordingRunner::default();
        let args = vec!["--port".to_string(), "9090".to_string()];

        project.serve(&runner, &args).unwrap();

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            Path::new(&calls[0].0),
            dir.path().join("bin/dev_appserver.py")
        );
        assert_eq!(calls[0].1, vec!["--port", "9090", "tailbone"]);
    }

    #[test]
    fn test_serve_missing_app_server() {
        let (_dir, project) = initialized(&[], None);
        let err = project.serve(&RecordingRunner::default(), &[]).unwrap_err();
        assert!(matches!(err, TailboneError::MissingDependency { .. }));
    }

    #[test]
    fn test_deploy_missing_descriptor() {
        let (_dir, project) = initialized(&["appcfg.py"], None);
        let prompt = FixedPrompt::new("my-app-123");
        let err = project
            .deploy(&RecordingRunner::default(), &prompt, Some("v1"))
            .unwrap_err();
        assert!(matches!(err, TailboneError::MissingAppDescriptor));
    }

    #[test]
    fn test_deploy_missing_deployer() {
        let (_dir, project) = initialized(&[], Some(TEMPLATE));
        let prompt = FixedPrompt::new("my-app-123");
        let err = project
            .deploy(&RecordingRunner::default(), &prompt, Some("v1"))
            .unwrap_err();
        assert!(matches!(err, TailboneError::MissingDependency { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_deploy_without_version_leaves_descriptor() {
        let (dir, project) = initialized(&["appcfg.py"], Some(TEMPLATE));
        let runner = RecordingRunner::default();
        let prompt = FixedPrompt::new("my-app-123");

        let err = project.deploy(&runner, &prompt, None).unwrap_err();
        assert!(matches!(err, TailboneError::MissingVersionArgument));
        assert_eq!(
            fs::read_to_string(dir.path().join("app.yaml")).unwrap(),
            TEMPLATE
        );
        assert_eq!(prompt.asked.get(), 0);
        assert!(runner.calls.borrow().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_deploy_replaces_placeholder_application() {
        let (dir, project) = initialized(&["appcfg.py"], Some(TEMPLATE));
        let runner = RecordingRunner::default();
        let prompt = FixedPrompt::new("my-app-123");

        project.deploy(&runner, &prompt, Some("v2")).unwrap();

        assert_eq!(prompt.asked.get(), 1);
        assert_eq!(
            fs::read_to_string(dir.path().join("app.yaml")).unwrap(),
            "application: my-app-123\nversion: v2\nruntime: python27\n"
        );
        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, vec!["update", "--oauth2", "tailbone"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_deploy_keeps_custom_application() {
        let content = "application: my-app-123\nversion: old\n";
        let (dir, project) = initialized(&["appcfg.py"], Some(content));
        let prompt = FixedPrompt::new("other-app");

        project
            .deploy(&RecordingRunner::default(), &prompt, Some("v3"))
            .unwrap();

        assert_eq!(prompt.asked.get(), 0);
        assert_eq!(
            fs::read_to_string(dir.path().join("app.yaml")).unwrap(),
            "application: my-app-123\nversion: v3\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_deploy_malformed_descriptor_is_untouched() {
        let content = "version: old\nruntime: python27\n";
        let (dir, project) = initialized(&["appcfg.py"], Some(content));
        let runner = RecordingRunner::default();
        let prompt = FixedPrompt::new("my-app-123");

        let err = project.deploy(&runner, &prompt, Some("v1")).unwrap_err();
        assert!(matches!(err, TailboneError::MalformedDescriptor { .. }));
        assert_eq!(
            fs::read_to_string(dir.path().join("app.yaml")).unwrap(),
            content
        );
        assert!(runner.calls.borrow().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_deploy_invalid_answer_is_untouched() {
        let (dir, project) = initialized(&["appcfg.py"], Some(TEMPLATE));
        let runner = RecordingRunner::default();
        let prompt = FixedPrompt::new("not valid");

        let err = project.deploy(&runner, &prompt, Some("v1")).unwrap_err();
        assert!(matches!(err, TailboneError::InvalidApplicationId { .. }));
        assert_eq!(
            fs::read_to_string(dir.path().join("app.yaml")).unwrap(),
            TEMPLATE
        );
    }

    #[test]
    fn test_update_requires_git() {
        let (_dir, project) = initialized(&[], None);
        let err = project.update().unwrap_err();
        match err {
            TailboneError::MissingDependency { executable, .. } => assert_eq!(executable, "git"),
            other => panic!("Expected MissingDependency, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_update_is_manual() {
        let (_dir, project) = initialized(&["git"], None);
        assert!(project.update().is_ok());
    }
}
