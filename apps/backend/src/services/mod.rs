pub mod players;
pub mod rounds;
pub mod tours;
