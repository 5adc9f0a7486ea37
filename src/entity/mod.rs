pub mod cards;
pub mod dealings;
pub mod entries;
pub mod games;
pub mod players;
pub mod sets;
pub mod users;
pub mod winners;

pub use cards::Entity as Cards;
pub use dealings::Entity as Dealings;
pub use entries::Entity as Entries;
pub use games::Entity as Games;
pub use players::Entity as Players;
pub use sets::Entity as Sets;
pub use users::Entity as Users;
pub use winners::Entity as Winners;
