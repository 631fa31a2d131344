/*! Line transformers.

Transforms lines by rewriting their content.

!*/

mod substitute;
mod transform;

pub use substitute::Substitution;
pub use transform::Transform;
