use crate::auth::Claims;
use crate::entity::users::{
    ActiveModel as UserActiveModel, Column, Entity as Users, Model as User,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

/// Resolve the token subject to a user row, provisioning it on first sight
pub async fn ensure_user_exists(
    db: &DatabaseConnection,
    claims: &Claims,
) -> Result<User, sea_orm::DbErr> {
    let existing_user = Users::find()
        .filter(Column::ExternalId.eq(&claims.sub))
        .one(db)
        .await?;

    match existing_user {
        Some(user) => Ok(user),
        None => {
            let new_user = UserActiveModel {
                id: Set(Uuid::new_v4()),
                external_id: Set(claims.sub.clone()),
                username: Set(claims.username.clone()),
                created_at: Set(Utc::now().into()),
                updated_at: Set(Utc::now().into()),
            };

            new_user.insert(db).await
        }
    }
}
