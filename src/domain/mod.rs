pub mod post;
pub mod section;

pub use post::Post;
pub use section::Section;
