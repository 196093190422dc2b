/// Use cases module containing application business logic orchestration
mod explain_dependency;

pub use explain_dependency::ExplainDependencyUseCase;
