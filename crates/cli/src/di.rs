use resinfo_probe_application::use_cases::ProbeResolversUseCase;
use resinfo_probe_domain::Config;
use resinfo_probe_infrastructure::dns::UdpResinfoAcquirer;
use std::sync::Arc;

pub struct ProbeServices {
    pub probe_resolvers: Arc<ProbeResolversUseCase>,
}

impl ProbeServices {
    pub fn new(config: &Config) -> Self {
        let acquirer = Arc::new(UdpResinfoAcquirer::new(config.probe.timeout()));

        Self {
            probe_resolvers: Arc::new(ProbeResolversUseCase::new(acquirer)),
        }
    }
}
