pub mod rounds;
pub mod scheduler;

pub use rounds::GameRounds;
pub use scheduler::RoundScheduler;
