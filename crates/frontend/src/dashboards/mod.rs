pub mod d400_admin_panel;

pub use d400_admin_panel::ui::AdminPanel;
