pub mod init;
pub mod meow;
pub mod name;

pub use init::init_command;
pub use meow::meow_command;
pub use name::name_command;
