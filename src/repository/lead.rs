use diesel::prelude::*;

use crate::{
    domain::lead::{Lead, NewLead},
    repository::{DieselRepository, LeadReader, LeadWriter},
    repository::errors::RepositoryResult,
};

impl LeadReader for DieselRepository {
    fn list_leads(&self) -> RepositoryResult<Vec<Lead>> {
        use crate::models::lead::Lead as DbLead;
        use crate::schema::leads;

        let mut conn = self.conn()?;
        let items = leads::table
            .order(leads::id.desc())
            .load::<DbLead>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl LeadWriter for DieselRepository {
    fn create_lead(&self, new_lead: &NewLead) -> RepositoryResult<Lead> {
        use crate::models::lead::{Lead as DbLead, NewLead as DbNewLead};
        use crate::schema::leads;

        let mut conn = self.conn()?;
        let insertable: DbNewLead = new_lead.into();
        let created = diesel::insert_into(leads::table)
            .values(&insertable)
            .get_result::<DbLead>(&mut conn)?;

        Ok(created.into())
    }
}
