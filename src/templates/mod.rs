/*! Triple templates

Templates are natural-language strings used to verbalize a single triple without a model,
e.g. `<subject> serves <object> food.`.

They are loaded from a JSON file mapping predicates to templates (see [TemplateTable]),
and picked for a given triple following a [SelectionPolicy].
Unknown predicates always resolve to [FALLBACK_TEMPLATE].
!*/
mod resolver;
mod table;

pub use resolver::SelectionPolicy;
pub use table::{TemplateEntry, TemplateTable};

/// Template used when no template exists for a predicate.
pub const FALLBACK_TEMPLATE: &str = "The <predicate> of <subject> is <object> .";
