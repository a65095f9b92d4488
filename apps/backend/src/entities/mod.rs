pub mod players;
pub mod round_scores;
pub mod rounds;
pub mod tours;

pub use players::Entity as Players;
pub use players::Model as Player;
pub use round_scores::Entity as RoundScores;
pub use round_scores::Model as RoundScore;
pub use rounds::Entity as Rounds;
pub use rounds::Model as Round;
pub use tours::Entity as Tours;
pub use tours::Model as Tour;
