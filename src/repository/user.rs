use diesel::prelude::*;

use crate::{
    domain::user::{NewUser, UpdateUser, User},
    repository::{DieselRepository, UserReader, UserWriter},
    repository::errors::RepositoryResult,
};

impl UserReader for DieselRepository {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>> {
        use crate::models::user::User as DbUser;
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table
            .find(id)
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(Into::into))
    }

    fn get_user_credentials(&self, email: &str) -> RepositoryResult<Option<(User, String)>> {
        use crate::models::user::User as DbUser;
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table
            .filter(users::email.eq(email))
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(|u| {
            let hash = u.password_hash.clone();
            (u.into(), hash)
        }))
    }

    fn get_password_hash(&self, id: i32) -> RepositoryResult<Option<String>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let hash = users::table
            .find(id)
            .select(users::password_hash)
            .first::<String>(&mut conn)
            .optional()?;

        Ok(hash)
    }
}

impl UserWriter for DieselRepository {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User> {
        use crate::models::user::{NewUser as DbNewUser, User as DbUser};
        use crate::schema::users;

        let mut conn = self.conn()?;
        let insertable: DbNewUser = new_user.into();
        let created = diesel::insert_into(users::table)
            .values(&insertable)
            .get_result::<DbUser>(&mut conn)?;

        Ok(created.into())
    }

    fn update_user(&self, id: i32, updates: &UpdateUser) -> RepositoryResult<User> {
        use crate::models::user::User as DbUser;
        use crate::schema::users;

        let mut conn = self.conn()?;
        let updated = diesel::update(users::table.find(id))
            .set((
                users::name.eq(updates.name.as_str()),
                users::email.eq(updates.email.as_str()),
                users::updated_at.eq(diesel::dsl::now),
            ))
            .get_result::<DbUser>(&mut conn)?;

        Ok(updated.into())
    }

    fn set_password_hash(&self, id: i32, password_hash: &str) -> RepositoryResult<()> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        diesel::update(users::table.find(id))
            .set((
                users::password_hash.eq(password_hash),
                users::updated_at.eq(diesel::dsl::now),
            ))
            .execute(&mut conn)?;

        Ok(())
    }
}
