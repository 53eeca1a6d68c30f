pub mod button;
pub mod dropdown_input;
pub mod faircv_title;
pub mod header;
pub mod main_message;
pub mod page;
pub mod pagination;
pub mod regular_input;
pub mod spinner;
pub mod user_gate;
pub mod wallet_gate;

pub use button::{Button, ButtonColor, ButtonHeight, ButtonStyle, ButtonType, ButtonWidth};
pub use dropdown_input::DropDownInput;
pub use faircv_title::FairCvTitleButton;
pub use header::Header;
pub use main_message::{MainMessage, MessageKind};
pub use page::Page;
pub use pagination::Pagination;
pub use regular_input::RegularInput;
pub use spinner::Spinner;
pub use user_gate::{AuthLayout, FairCvLayout};
pub use wallet_gate::WalletGate;
