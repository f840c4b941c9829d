mod about;
mod carousel;
mod features;
mod hero;

pub use about::AboutSection;
pub use carousel::Carousel;
pub use features::FeaturesSection;
pub use hero::Hero;
