/// Modal state pattern
///
/// Represents whether a modal is open or closed, with its data when open.
///
/// # Examples
///
/// ```rust
/// use partner_app::tui::ModalState;
///
/// let mut modal: ModalState<&str> = ModalState::Closed;
/// modal.open_with("Discard changes?");
/// assert_eq!(modal.data(), Some(&"Discard changes?"));
/// ```
#[derive(Clone, Debug)]
pub enum ModalState<T> {
    /// Modal is closed
    Closed,

    /// Modal is open with its data
    Open(T),
}

impl<T> Default for ModalState<T> {
    fn default() -> Self {
        ModalState::Closed
    }
}

impl<T> ModalState<T> {
    /// Check if the modal is open
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    /// Get the data if open, None otherwise
    pub fn data(&self) -> Option<&T> {
        match self {
            ModalState::Open(data) => Some(data),
            ModalState::Closed => None,
        }
    }

    /// Open the modal with data, replacing whatever was open
    pub fn open_with(&mut self, data: T) {
        *self = ModalState::Open(data);
    }

    /// Close the modal, handing back its data
    pub fn take(&mut self) -> Option<T> {
        match std::mem::take(self) {
            ModalState::Open(data) => Some(data),
            ModalState::Closed => None,
        }
    }
}
