use crate::tui::ScreenId;

/// Print every screen key accepted by `tui --open`
pub fn screens_command() {
    for id in ScreenId::ALL {
        println!("{:<18} {}", id.key(), id.title());
    }
}
