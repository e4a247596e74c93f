//! Static content store: site metadata, projects, terminal programs.
//!
//! Everything here is loaded once at startup and immutable afterwards.
//! The store is the single source the resolver and the views read from.

mod loader;
mod model;

pub use loader::{bundled, load, load_from_dir, ContentSources};
pub use model::{
    AboutData, CannedOutput, CommandTable, ContentError, ContentStore, Education, Experience,
    LineKind, OutputStyle, Program, ProgramOutput, ProgramVerb, Project, SiteInfo, SkillGroup,
    SocialLink,
};
