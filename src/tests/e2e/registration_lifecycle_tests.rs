use crate::modules::registrations::adapters::outbound::registration_store_in_memory::InMemoryRegistrationStore;
use crate::modules::registrations::core::ports::RegistrationStore;
use crate::modules::registrations::use_cases::register_citizen::decision::DecideError;
use crate::modules::registrations::use_cases::register_citizen::handler::{
    ApplicationError, DEFAULT_MINIMUM_AGE, RegisterCitizenHandler,
};
use crate::tests::fixtures::commands::register_citizen::RegisterCitizenBuilder;
use std::sync::Arc;

#[tokio::test]
async fn registers_lists_and_releases_citizens() {
    let store = Arc::new(InMemoryRegistrationStore::new());
    let handler = RegisterCitizenHandler::new(DEFAULT_MINIMUM_AGE, store.clone());

    let commands: Vec<_> = ["3333333333333", "1111111111111", "2222222222222"]
        .into_iter()
        .map(|citizen_id| RegisterCitizenBuilder::new().citizen_id(citizen_id).build())
        .collect();

    for command in commands.iter().cloned() {
        handler.handle(command).await.unwrap();
    }

    let list = store.list().await.unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[0].citizen_id, "1111111111111");
    assert_eq!(list[2].citizen_id, "3333333333333");

    let again = handler.handle(commands[0].clone()).await;
    assert!(matches!(
        again,
        Err(ApplicationError::Domain(DecideError::AlreadyRegistered))
    ));

    assert!(store.remove(&commands[0].citizen_id).await.unwrap());
    handler.handle(commands[0].clone()).await.unwrap();
    assert_eq!(store.list().await.unwrap().len(), 3);
}
