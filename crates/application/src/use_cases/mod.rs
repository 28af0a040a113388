pub mod probe_resolvers;

pub use probe_resolvers::ProbeResolversUseCase;
