//! Command resolution: pure function of input plus the content store.
//!
//! The resolver renders nothing and mutates nothing. It returns data
//! describing what to show and which side effect (if any) the caller should
//! apply. Unresolvable input degrades to the configured default message;
//! there is no failure path.

use super::Command;
use crate::content::{ContentStore, LineKind, OutputStyle, ProgramOutput, ProgramVerb};

/// One render-ready line of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseLine {
    pub text: String,
    pub kind: LineKind,
}

impl ResponseLine {
    fn new(text: impl Into<String>, kind: LineKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// A resolved response: what to display, and whether the lines should be
/// revealed in stages rather than all at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub lines: Vec<ResponseLine>,
    pub animated: bool,
}

impl Response {
    fn text(message: impl Into<String>) -> Self {
        Self {
            lines: vec![ResponseLine::new(message, LineKind::Text)],
            animated: false,
        }
    }

    fn from_canned(lines: &[String]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|l| ResponseLine::new(l.clone(), LineKind::Text))
                .collect(),
            animated: false,
        }
    }
}

/// Side effects are explicit and limited to these three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Replace the history with the empty sequence.
    ClearHistory,
    /// Show the detail overlay for this project.
    OpenProject(String),
}

/// The outcome of resolving one submitted command. `clear` carries no
/// renderable response; everything else does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub response: Option<Response>,
    pub effect: Effect,
}

impl Resolution {
    fn respond(response: Response) -> Self {
        Self {
            response: Some(response),
            effect: Effect::None,
        }
    }
}

/// Resolve raw input against the content store.
///
/// Returns `None` for empty or whitespace-only input, which produces no
/// history entry at all.
pub fn resolve(raw: &str, store: &ContentStore) -> Option<Resolution> {
    let command = Command::parse(raw)?;

    let resolution = match command {
        Command::Help => Resolution::respond(Response::from_canned(&store.commands.help.output)),
        Command::Ls => Resolution::respond(listing(store)),
        Command::Clear => Resolution {
            response: None,
            effect: Effect::ClearHistory,
        },
        Command::Cd(target) => resolve_cd(&target, store),
        Command::Cat(id) => Resolution::respond(resolve_program(&id, ProgramVerb::Cat, store)),
        Command::Run(id) => Resolution::respond(resolve_program(&id, ProgramVerb::Run, store)),
        Command::Other(_) => {
            Resolution::respond(Response::from_canned(&store.commands.default.output))
        }
    };
    Some(resolution)
}

fn resolve_cd(target: &str, store: &ContentStore) -> Resolution {
    if store.project(target).is_some() {
        return Resolution {
            response: Some(Response::text(format!(
                "Opening {target} project information..."
            ))),
            effect: Effect::OpenProject(target.to_string()),
        };
    }

    if target == ".." || target == "~" {
        return Resolution::respond(Response::text("Back to home directory."));
    }

    Resolution::respond(Response::text(format!("Directory not found: {target}")))
}

fn resolve_program(id: &str, verb: ProgramVerb, store: &ContentStore) -> Response {
    let Some(output) = store.program(id).and_then(|p| p.output_for(verb)) else {
        return Response::text(format!("File not found: {id}"));
    };
    program_response(output, verb)
}

fn program_response(output: &ProgramOutput, verb: ProgramVerb) -> Response {
    let lines = output
        .output
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let kind = match output.style {
                OutputStyle::Plain => LineKind::Text,
                OutputStyle::Source => LineKind::Source,
                OutputStyle::Result => match i {
                    0 => LineKind::Text,
                    1 => LineKind::Emphasis,
                    _ => LineKind::Muted,
                },
            };
            ResponseLine::new(line.clone(), kind)
        })
        .collect();

    Response {
        lines,
        // Staged reveal only applies to `run`; `cat` prints at once even when
        // the program tags its run output as animated.
        animated: verb == ProgramVerb::Run && output.animation.is_some(),
    }
}

/// The `ls` listing, generated from the store: projects as directories,
/// programs as plain files.
fn listing(store: &ContentStore) -> Response {
    let mut lines = vec![ResponseLine::new("projects/", LineKind::Heading)];
    for project in store.projects() {
        lines.push(ResponseLine::new(
            format!("  {}/", project.id),
            LineKind::ProjectRef,
        ));
    }
    for program in store.programs() {
        lines.push(ResponseLine::new(
            format!("  {}", program.id),
            LineKind::ProgramRef,
        ));
    }
    Response {
        lines,
        animated: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::bundled;

    fn first_line(resolution: &Resolution) -> &str {
        &resolution.response.as_ref().unwrap().lines[0].text
    }

    #[test]
    fn cd_known_project_opens_overlay() {
        let store = bundled();
        for project in store.projects() {
            let resolution = resolve(&format!("cd {}", project.id), store).unwrap();
            assert_eq!(resolution.effect, Effect::OpenProject(project.id.clone()));
            assert_eq!(
                first_line(&resolution),
                format!("Opening {} project information...", project.id)
            );
        }
    }

    #[test]
    fn cd_portfolio_site_scenario() {
        let resolution = resolve("cd portfolio-site", bundled()).unwrap();
        assert_eq!(
            first_line(&resolution),
            "Opening portfolio-site project information..."
        );
        assert_eq!(
            resolution.effect,
            Effect::OpenProject("portfolio-site".to_string())
        );
    }

    #[test]
    fn cd_unknown_directory_not_found() {
        let resolution = resolve("cd nonexistent", bundled()).unwrap();
        assert_eq!(first_line(&resolution), "Directory not found: nonexistent");
        assert_eq!(resolution.effect, Effect::None);
    }

    #[test]
    fn cd_dotdot_and_tilde_go_home() {
        for target in ["cd ..", "cd ~"] {
            let resolution = resolve(target, bundled()).unwrap();
            assert_eq!(first_line(&resolution), "Back to home directory.");
            assert_eq!(resolution.effect, Effect::None);
        }
    }

    #[test]
    fn clear_requests_history_wipe_without_response() {
        let resolution = resolve("clear", bundled()).unwrap();
        assert_eq!(resolution.effect, Effect::ClearHistory);
        assert!(resolution.response.is_none());
    }

    #[test]
    fn empty_input_is_a_no_op() {
        assert!(resolve("", bundled()).is_none());
        assert!(resolve("   \t", bundled()).is_none());
    }

    #[test]
    fn verb_case_insensitivity_resolves_identically() {
        let store = bundled();
        let lower = resolve("help", store).unwrap();
        let upper = resolve("HELP", store).unwrap();
        let mixed = resolve("Help", store).unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
    }

    #[test]
    fn unknown_command_gets_default_message_never_panics() {
        let resolution = resolve("frobnicate", bundled()).unwrap();
        assert_eq!(
            first_line(&resolution),
            "Command not found. Type 'help' for available commands."
        );
        assert_eq!(resolution.effect, Effect::None);
    }

    #[test]
    fn cat_without_defined_verb_is_file_not_found() {
        // motd.txt defines only `cat`; `run` must miss.
        let resolution = resolve("run motd.txt", bundled()).unwrap();
        assert_eq!(first_line(&resolution), "File not found: motd.txt");
    }

    #[test]
    fn unknown_program_id_is_file_not_found() {
        let resolution = resolve("cat nosuch.txt", bundled()).unwrap();
        assert_eq!(first_line(&resolution), "File not found: nosuch.txt");
        assert_eq!(resolution.effect, Effect::None);
    }

    #[test]
    fn cat_known_program_returns_canned_lines() {
        let store = bundled();
        let resolution = resolve("cat euler.py", store).unwrap();
        let response = resolution.response.unwrap();
        let expected = &store.program("euler.py").unwrap().commands["cat"].output;
        assert_eq!(response.lines.len(), expected.len());
        assert!(response.lines.iter().all(|l| l.kind == LineKind::Source));
        assert!(!response.animated);
    }

    #[test]
    fn run_with_animation_tag_is_animated() {
        let resolution = resolve("run euler.py", bundled()).unwrap();
        let response = resolution.response.unwrap();
        assert!(response.animated);
        assert_eq!(response.lines[1].kind, LineKind::Emphasis);
        assert_eq!(response.lines[2].kind, LineKind::Muted);
    }

    #[test]
    fn ls_lists_projects_then_programs() {
        let store = bundled();
        let resolution = resolve("ls", store).unwrap();
        let response = resolution.response.unwrap();
        assert_eq!(response.lines[0].text, "projects/");
        assert_eq!(
            response.lines.len(),
            1 + store.projects().len() + store.programs().len()
        );
        assert!(response.lines[1].text.ends_with('/'));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::content::bundled;
    use proptest::prelude::*;

    proptest! {
        /// Property: resolution is total. Arbitrary input never panics, and
        /// non-blank input always yields either a response or a clear effect.
        #[test]
        fn resolve_is_total(input in ".{0,80}") {
            let store = bundled();
            match resolve(&input, store) {
                None => prop_assert!(input.trim().is_empty()),
                Some(resolution) => prop_assert!(
                    resolution.response.is_some() || resolution.effect == Effect::ClearHistory
                ),
            }
        }

        /// Property: the verb's case never changes the outcome.
        #[test]
        fn verb_case_never_changes_outcome(arg in "[a-z0-9.-]{1,20}") {
            let store = bundled();
            let lower = resolve(&format!("cat {arg}"), store);
            let upper = resolve(&format!("CAT {arg}"), store);
            prop_assert_eq!(lower, upper);
        }
    }
}
