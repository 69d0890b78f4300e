use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::registrations::core::record::RegistrationRecord;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlRegistration {
    pub citizen_id: String,
    pub name: String,
    pub surname: String,
    pub birth_date: String,
    pub occupation: String,
    pub phone_number: String,
    pub is_risk: bool,
    pub address: String,
    pub registered_at: String,
}

impl From<RegistrationRecord> for GqlRegistration {
    fn from(r: RegistrationRecord) -> Self {
        Self {
            citizen_id: r.citizen_id,
            name: r.name,
            surname: r.surname,
            birth_date: r.birth_date.to_string(),
            occupation: r.occupation,
            phone_number: r.phone_number,
            is_risk: r.is_risk,
            address: r.address,
            registered_at: r.registered_at.to_rfc3339(),
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn registrations(&self, context: &Context<'_>) -> GqlResult<Vec<GqlRegistration>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.store.list().await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn registration(
        &self,
        context: &Context<'_>,
        citizen_id: String,
    ) -> GqlResult<Option<GqlRegistration>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.store.get(&citizen_id).await?.map(Into::into))
    }
}
