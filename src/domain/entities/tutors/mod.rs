pub mod tutor;

pub use tutor::Tutor;
