mod clock;
mod resolution;

pub use clock::Clock;
pub use resolution::ResolutionPolicy;
