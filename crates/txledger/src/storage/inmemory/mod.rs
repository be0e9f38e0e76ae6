mod repository;

pub use repository::InMemoryTransactionRepository;
