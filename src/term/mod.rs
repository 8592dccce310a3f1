//! Terminal presentation of the pixel surface.

mod renderer;

pub use renderer::TermPresenter;
