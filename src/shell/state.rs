use crate::modules::registrations::adapters::outbound::registration_store_in_memory::InMemoryRegistrationStore;
use crate::modules::registrations::core::ports::RegistrationStore;
use crate::modules::registrations::use_cases::register_citizen::handler::RegisterCitizenHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RegistrationStore>,
    pub register_handler: Arc<RegisterCitizenHandler<InMemoryRegistrationStore>>,
}

impl AppState {
    pub fn new(minimum_age: u32, store: Arc<InMemoryRegistrationStore>) -> Self {
        let register_handler = Arc::new(RegisterCitizenHandler::new(minimum_age, store.clone()));
        Self {
            store,
            register_handler,
        }
    }
}
