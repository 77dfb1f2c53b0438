use crate::content::ContentModule;
use crate::markup;

use super::handler::{ExamineFn, HandlerSpec, ReadFn};
use super::registry::FileRegistry;

/// Install the built-in handlers.
///
/// Order matters: the plain-text handler claims `html` first so bare
/// markup still renders, then the document handler overwrites that
/// binding with the richer strategy. The registry logs the overwrite.
pub fn install_defaults(registry: &mut FileRegistry) {
    registry.install(text_handler());
    registry.install(document_handler());
    registry.install(script_handler());
}

/// Plain content: the loaded form is already display-ready.
pub fn text_handler() -> HandlerSpec {
    let read: ReadFn = Box::new(|_node, module| Box::pin(async move { module.into_text() }));
    HandlerSpec {
        extensions: vec!["txt".to_string(), "html".to_string()],
        read,
        examine: None,
    }
}

/// Structured documents: `read` stays an identity passthrough, only
/// `examine` parses the markup, pulling the description out of the
/// `examine` meta tag with `description` as the fallback.
pub fn document_handler() -> HandlerSpec {
    let read: ReadFn = Box::new(|_node, module| Box::pin(async move { module.into_text() }));
    let examine: ExamineFn = Box::new(|_node, module| {
        let text = module.as_text()?;
        markup::meta_content(text, "examine").or_else(|| markup::meta_content(text, "description"))
    });
    HandlerSpec {
        extensions: vec!["html".to_string()],
        read,
        examine: Some(examine),
    }
}

/// Executable content: modules supply behavior, not data. The capability
/// slots are filled by the game build, so invoking them is the one
/// sanctioned exception to treating content as inert.
pub fn script_handler() -> HandlerSpec {
    let read: ReadFn = Box::new(|_node, module| {
        Box::pin(async move {
            match module {
                ContentModule::Script(script) => script.run.map(|run| run()),
                ContentModule::Text(_) => None,
            }
        })
    });
    let examine: ExamineFn = Box::new(|_node, module| {
        module
            .as_script()
            .and_then(|script| script.examine.as_ref().map(|examine| examine()))
    });
    HandlerSpec {
        extensions: vec!["js".to_string()],
        read,
        examine: Some(examine),
    }
}
