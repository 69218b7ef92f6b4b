#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use switch_cli::error::Result;
use switch_cli::process::{ProcessOutput, ProcessRunner};
use switch_cli::prompt::Prompter;

pub const ISSUE_URL: &str = "https://github.com/FA-Switch-Platform/CICD/issues/42";

/// Answers prompts from pre-recorded queues and remembers what was asked.
#[derive(Default)]
pub struct ScriptedPrompter {
    confirms: RefCell<VecDeque<bool>>,
    selects: RefCell<VecDeque<usize>>,
    numbers: RefCell<VecDeque<u16>>,
    pub asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn confirm_with(self, answer: bool) -> Self {
        self.confirms.borrow_mut().push_back(answer);
        self
    }

    pub fn select_with(self, index: usize) -> Self {
        self.selects.borrow_mut().push_back(index);
        self
    }

    pub fn number_with(self, value: u16) -> Self {
        self.numbers.borrow_mut().push_back(value);
        self
    }

    pub fn was_asked(&self, prompt: &str) -> bool {
        self.asked.borrow().iter().any(|asked| asked == prompt)
    }

    fn record(&self, prompt: &str) {
        self.asked.borrow_mut().push(prompt.to_string());
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool> {
        self.record(prompt);
        Ok(self
            .confirms
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected confirm: {prompt}")))
    }

    fn select(&self, prompt: &str, _items: &[String], _default: usize) -> Result<usize> {
        self.record(prompt);
        Ok(self
            .selects
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected select: {prompt}")))
    }

    fn number(&self, prompt: &str) -> Result<u16> {
        self.record(prompt);
        Ok(self
            .numbers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected number: {prompt}")))
    }
}

/// Stands in for `gh`, `git` and `az`.
///
/// `gh repo clone` copies `template` into the destination (adding a `.git`
/// directory like a real clone would), `gh org list` prints `orgs` and
/// `gh issue create` prints [`ISSUE_URL`]. Everything else succeeds silently
/// unless listed in `missing`.
pub struct FakeRunner {
    template: PathBuf,
    orgs: Vec<String>,
    missing: Vec<String>,
    pub calls: RefCell<Vec<Vec<String>>>,
}

impl FakeRunner {
    pub fn new<P: Into<PathBuf>>(template: P) -> Self {
        Self { template: template.into(), orgs: Vec::new(), missing: Vec::new(), calls: RefCell::default() }
    }

    pub fn with_orgs(mut self, orgs: &[&str]) -> Self {
        self.orgs = orgs.iter().map(|o| o.to_string()).collect();
        self
    }

    pub fn with_missing(mut self, program: &str) -> Self {
        self.missing.push(program.to_string());
        self
    }

    /// Calls whose first arguments equal `prefix`.
    pub fn calls_starting_with(&self, prefix: &[&str]) -> Vec<Vec<String>> {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.len() >= prefix.len() && call.iter().zip(prefix).all(|(a, b)| a == b))
            .cloned()
            .collect()
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<ProcessOutput> {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().map(|a| a.to_string()));
        self.calls.borrow_mut().push(call);

        if self.missing.iter().any(|m| m == program) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "program not found"));
        }

        match (program, args) {
            ("gh", ["repo", "clone", _, dest, ..]) => {
                switch_cli::fs::copy_tree(&self.template, dest)
                    .map_err(|e| io::Error::other(e.to_string()))?;
                fs::create_dir_all(Path::new(dest).join(".git"))?;
                fs::write(Path::new(dest).join(".git/HEAD"), "ref: refs/heads/main\n")?;
                Ok(ProcessOutput::ok(""))
            }
            ("gh", ["org", "list", ..]) => Ok(ProcessOutput::ok(self.orgs.join("\n"))),
            ("gh", ["issue", "create", ..]) => Ok(ProcessOutput::ok(format!("{ISSUE_URL}\n"))),
            _ => Ok(ProcessOutput::ok("")),
        }
    }
}

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A core template repository as it would be cloned.
pub fn core_template(root: &Path) -> PathBuf {
    let dir = root.join("core-template");
    write_file(
        &dir,
        ".github/workflows/ci.yml",
        "name: [name] build\nrepo: <%= repository %>\ntoken: ${{ secrets.GITHUB_TOKEN }}\n",
    );
    write_file(&dir, "scripts/build.sh", "#!/bin/sh\necho building [name]\n");
    write_file(&dir, "README.md", "Hello [name]\n");
    dir
}

/// Local `env/` and `sonar/` templates.
pub fn local_templates(root: &Path) -> PathBuf {
    let dir = root.join("templates");
    write_file(
        &dir,
        "env/.github/environment/[env]-parameters.bicepparam",
        "param environment = '<%= currentEnv.name %>'\nparam app = '[name]'\n",
    );
    write_file(
        &dir,
        "env/.github/environment/[env]-parameters-api.bicepparam",
        "param api = '[name]-api'\n",
    );
    write_file(&dir, "sonar/sonar-project.properties", "sonar.projectKey=[name]\n");
    dir
}
