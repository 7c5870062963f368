//! Client business logic - list, create and delete client records.
//!
//! Deleting a client does not touch its projects; they keep the old `client_id`.

use crate::{
    core::validation::{optional_text, require_non_empty},
    entities::{Client, client},
    errors::Result,
};
use sea_orm::{QuerySelect, Set, prelude::*};
use tracing::{info, warn};

/// Raw form input for a new client
#[derive(Debug, Clone, Copy, Default)]
pub struct NewClient<'a> {
    /// Client name (required)
    pub name: &'a str,
    /// Contact detail
    pub contact: &'a str,
    /// Address
    pub address: &'a str,
}

/// Retrieves all clients in store order.
pub async fn get_all_clients(db: &DatabaseConnection) -> Result<Vec<client::Model>> {
    Client::find().all(db).await.map_err(Into::into)
}

/// Retrieves a client by id.
pub async fn get_client_by_id(
    db: &DatabaseConnection,
    client_id: i64,
) -> Result<Option<client::Model>> {
    Client::find_by_id(client_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a client after checking that a name was given.
///
/// # Errors
/// Returns `Error::MissingField` for an empty name (nothing is written), or a
/// database error if the insert fails.
pub async fn create_client(db: &DatabaseConnection, form: NewClient<'_>) -> Result<client::Model> {
    let name = require_non_empty("Client name", form.name)
        .inspect_err(|e| warn!("Rejected client: {}", e))?;

    let client = client::ActiveModel {
        name: Set(name),
        contact: Set(optional_text(form.contact)),
        address: Set(optional_text(form.address)),
        ..Default::default()
    };
    let created = client.insert(db).await?;
    info!("Added client {} '{}'", created.id, created.name);
    Ok(created)
}

/// Deletes a client by id, returning the number of rows removed (0 if absent).
pub async fn delete_client(db: &DatabaseConnection, client_id: i64) -> Result<u64> {
    let result = Client::delete_by_id(client_id).exec(db).await?;
    info!("Deleted client {} ({} row(s))", client_id, result.rows_affected);
    Ok(result.rows_affected)
}

/// Id/name pairs for choosing a client on the project form.
pub async fn get_client_choices(db: &DatabaseConnection) -> Result<Vec<(i64, String)>> {
    Client::find()
        .select_only()
        .column(client::Column::Id)
        .column(client::Column::Name)
        .into_tuple::<(i64, String)>()
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::Error;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_client_round_trip() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_client(
            &db,
            NewClient {
                name: "Acme",
                contact: "555",
                address: "1 Main St",
            },
        )
        .await?;

        let clients = get_all_clients(&db).await?;
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].id, created.id);
        assert_eq!(clients[0].name, "Acme");
        assert_eq!(clients[0].contact.as_deref(), Some("555"));
        assert_eq!(clients[0].address.as_deref(), Some("1 Main St"));

        let second = create_test_client(&db, "Beta Builders").await?;
        assert_ne!(second.id, created.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_client_requires_name() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_client(&db, "Existing").await?;
        let (logs, _guard) = CapturedLogs::capture();

        let result = create_client(
            &db,
            NewClient {
                name: "  ",
                contact: "555",
                address: "",
            },
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::MissingField { field: "Client name" }
        ));

        assert_eq!(get_all_clients(&db).await?.len(), 1);
        let logged = logs.contents();
        assert!(logged.contains("WARN"));
        assert!(logged.contains("Rejected client: Client name is required"));

        Ok(())
    }

    #[tokio::test]
    async fn test_blank_optional_fields_stored_as_null() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_test_client(&db, "Acme").await?;
        let found = get_client_by_id(&db, created.id).await?.unwrap();
        assert_eq!(found.contact, None);
        assert_eq!(found.address, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_client() -> Result<()> {
        let db = setup_test_db().await?;
        let client = create_test_client(&db, "Acme").await?;

        assert_eq!(delete_client(&db, client.id).await?, 1);
        assert!(get_all_clients(&db).await?.is_empty());

        // Missing ids are a no-op, not an error
        assert_eq!(delete_client(&db, client.id).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_client_choices() -> Result<()> {
        let db = setup_test_db().await?;
        let acme = create_test_client(&db, "Acme").await?;
        let beta = create_test_client(&db, "Beta").await?;

        let mut choices = get_client_choices(&db).await?;
        choices.sort_unstable();
        assert_eq!(
            choices,
            vec![(acme.id, "Acme".to_string()), (beta.id, "Beta".to_string())]
        );

        Ok(())
    }
}
