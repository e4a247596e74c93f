use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Site-wide metadata: identity, splash copy, navigation labels, socials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    pub title: String,
    pub description: String,

    #[serde(default)]
    pub splash: Splash,

    #[serde(default)]
    pub nav: NavLabels,

    #[serde(default)]
    pub footer: FooterInfo,

    #[serde(default)]
    pub social: Vec<SocialLink>,

    #[serde(default)]
    pub theme: ThemeInfo,

    #[serde(default)]
    pub terminal: TerminalInfo,

    #[serde(default)]
    pub about: AboutData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Splash {
    #[serde(default)]
    pub greeting: String,
    #[serde(default)]
    pub taglines: Vec<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub cta_primary: String,
    #[serde(default)]
    pub cta_secondary: String,
}

impl Default for Splash {
    fn default() -> Self {
        Self {
            greeting: String::new(),
            taglines: Vec::new(),
            bio: String::new(),
            cta_primary: "Projects".to_string(),
            cta_secondary: "About".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavLabels {
    #[serde(default = "default_nav_home")]
    pub home: String,
    #[serde(default = "default_nav_projects")]
    pub projects: String,
    #[serde(default = "default_nav_about")]
    pub about: String,
}

fn default_nav_home() -> String {
    "Home".to_string()
}

fn default_nav_projects() -> String {
    "Projects".to_string()
}

fn default_nav_about() -> String {
    "About".to_string()
}

impl Default for NavLabels {
    fn default() -> Self {
        Self {
            home: default_nav_home(),
            projects: default_nav_projects(),
            about: default_nav_about(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FooterInfo {
    #[serde(default)]
    pub tagline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeInfo {
    #[serde(default = "default_theme_name")]
    pub default: String,
}

fn default_theme_name() -> String {
    "dark".to_string()
}

impl Default for ThemeInfo {
    fn default() -> Self {
        Self {
            default: default_theme_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalInfo {
    #[serde(default = "default_initial_message")]
    pub initial_message: String,
    #[serde(default = "default_prompt_symbol")]
    pub prompt_symbol: String,
}

fn default_initial_message() -> String {
    "Welcome to the terminal. Type 'help' for available commands.".to_string()
}

fn default_prompt_symbol() -> String {
    "$".to_string()
}

impl Default for TerminalInfo {
    fn default() -> Self {
        Self {
            initial_message: default_initial_message(),
            prompt_symbol: default_prompt_symbol(),
        }
    }
}

/// Biography data for the about page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AboutData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub long_bio: String,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub period: String,
}

/// One portfolio item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub demo_link: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// A named entity the terminal can `cat` or `run`, each verb yielding
/// independently authored output. A verb with no entry is "not found".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub commands: HashMap<String, ProgramOutput>,
}

impl Program {
    pub fn output_for(&self, verb: ProgramVerb) -> Option<&ProgramOutput> {
        self.commands.get(verb.as_str())
    }
}

/// The verbs a program responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramVerb {
    Cat,
    Run,
}

impl ProgramVerb {
    pub fn as_str(self) -> &'static str {
        match self {
            ProgramVerb::Cat => "cat",
            ProgramVerb::Run => "run",
        }
    }
}

/// Canned output for one program verb.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramOutput {
    pub output: Vec<String>,
    #[serde(default)]
    pub style: OutputStyle,
    #[serde(default)]
    pub animation: Option<String>,
}

/// How a program output's lines should be classed for rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    #[default]
    Plain,
    /// Source listing: every line rendered as code.
    Source,
    /// Invocation echo first, result line emphasized, trailing notes muted.
    Result,
}

/// Per-line render class attached by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Text,
    Heading,
    ProjectRef,
    ProgramRef,
    Source,
    Emphasis,
    Muted,
}

/// The fixed command table: canned payloads for `help` and the
/// unknown-command fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandTable {
    #[serde(default = "default_help_output")]
    pub help: CannedOutput,
    #[serde(default = "default_unknown_output")]
    pub default: CannedOutput,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CannedOutput {
    pub output: Vec<String>,
}

fn default_help_output() -> CannedOutput {
    CannedOutput {
        output: vec!["Commands: help, ls, clear, cd <project>, cat <program>, run <program>".to_string()],
    }
}

fn default_unknown_output() -> CannedOutput {
    CannedOutput {
        output: vec!["Command not found. Type 'help' for available commands.".to_string()],
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self {
            help: default_help_output(),
            default: default_unknown_output(),
        }
    }
}

/// Errors from assembling the content store. Load failures from individual
/// sources are recovered by the loader's fallback chain; only validation
/// failures surface from here.
#[derive(Debug)]
pub enum ContentError {
    IoError(String),
    ParseError(String),
    DuplicateProjectId(String),
    DuplicateProgramId(String),
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::IoError(msg) => write!(f, "IO error: {msg}"),
            ContentError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ContentError::DuplicateProjectId(id) => write!(f, "Duplicate project id: {id}"),
            ContentError::DuplicateProgramId(id) => write!(f, "Duplicate program id: {id}"),
        }
    }
}

impl std::error::Error for ContentError {}

/// The assembled, validated content store.
///
/// Projects and programs keep document order (it drives listing order and
/// the suggested-commands strip); the id indexes back the resolver lookups.
#[derive(Debug, Clone)]
pub struct ContentStore {
    pub site: SiteInfo,
    projects: Vec<Project>,
    programs: Vec<Program>,
    project_index: HashMap<String, usize>,
    program_index: HashMap<String, usize>,
    pub commands: CommandTable,
}

impl ContentStore {
    pub fn new(
        site: SiteInfo,
        projects: Vec<Project>,
        programs: Vec<Program>,
        commands: CommandTable,
    ) -> Result<Self, ContentError> {
        let mut project_index = HashMap::with_capacity(projects.len());
        for (i, project) in projects.iter().enumerate() {
            if project_index.insert(project.id.clone(), i).is_some() {
                return Err(ContentError::DuplicateProjectId(project.id.clone()));
            }
        }

        let mut program_index = HashMap::with_capacity(programs.len());
        for (i, program) in programs.iter().enumerate() {
            if program_index.insert(program.id.clone(), i).is_some() {
                return Err(ContentError::DuplicateProgramId(program.id.clone()));
            }
        }

        Ok(Self {
            site,
            projects,
            programs,
            project_index,
            program_index,
            commands,
        })
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.project_index.get(id).map(|&i| &self.projects[i])
    }

    pub fn program(&self, id: &str) -> Option<&Program> {
        self.program_index.get(id).map(|&i| &self.programs[i])
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }

    /// Unique tags across all projects, in first-seen order.
    pub fn all_tags(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for project in &self.projects {
            for tag in &project.tags {
                if !seen.contains(&tag.as_str()) {
                    seen.push(tag.as_str());
                }
            }
        }
        seen
    }

    /// The clickable command suggestions shown under the terminal.
    pub fn suggested_commands(&self) -> Vec<String> {
        let mut suggestions = vec!["ls".to_string()];
        if let Some(project) = self.projects.first() {
            suggestions.push(format!("cd {}", project.id));
        }
        if let Some(program) = self.programs.first() {
            suggestions.push(format!("cat {}", program.id));
            suggestions.push(format!("run {}", program.id));
        }
        suggestions.push("help".to_string());
        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str) -> Project {
        Project {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            tags: Vec::new(),
            link: String::new(),
            demo_link: None,
            featured: false,
        }
    }

    fn site() -> SiteInfo {
        serde_json::from_str(r#"{"name": "n", "title": "t", "description": "d"}"#).unwrap()
    }

    #[test]
    fn duplicate_project_ids_rejected() {
        let result = ContentStore::new(
            site(),
            vec![project("a"), project("a")],
            Vec::new(),
            CommandTable::default(),
        );
        assert!(matches!(result, Err(ContentError::DuplicateProjectId(id)) if id == "a"));
    }

    #[test]
    fn project_lookup_by_id() {
        let store = ContentStore::new(
            site(),
            vec![project("a"), project("b")],
            Vec::new(),
            CommandTable::default(),
        )
        .unwrap();
        assert_eq!(store.project("b").unwrap().id, "b");
        assert!(store.project("c").is_none());
    }

    #[test]
    fn all_tags_unique_in_first_seen_order() {
        let mut a = project("a");
        a.tags = vec!["rust".to_string(), "tui".to_string()];
        let mut b = project("b");
        b.tags = vec!["tui".to_string(), "web".to_string()];

        let store =
            ContentStore::new(site(), vec![a, b], Vec::new(), CommandTable::default()).unwrap();
        assert_eq!(store.all_tags(), vec!["rust", "tui", "web"]);
    }

    #[test]
    fn site_optional_sections_default() {
        let info = site();
        assert_eq!(info.nav.home, "Home");
        assert_eq!(info.theme.default, "dark");
        assert_eq!(info.terminal.prompt_symbol, "$");
        assert!(info.about.skills.is_empty());
    }

    #[test]
    fn program_verb_lookup() {
        let program: Program = serde_json::from_str(
            r#"{
                "id": "x.py",
                "name": "x",
                "commands": { "cat": { "output": ["line"] } }
            }"#,
        )
        .unwrap();
        assert!(program.output_for(ProgramVerb::Cat).is_some());
        assert!(program.output_for(ProgramVerb::Run).is_none());
    }
}
