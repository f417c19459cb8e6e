pub mod confirmation;

pub use confirmation::ConfirmationModal;
