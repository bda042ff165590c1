//! ValidatedClient: a record whose four fields all passed validation.

use super::client_key::ClientKey;
use super::email::EmailAddress;
use super::field::ClientField;
use super::name::ClientName;
use super::phone::PhoneNumber;
use super::record::ClientRecord;
use super::validators::ValidationResult;
use serde::{Deserialize, Serialize};

/// A client record whose fields are known-good and normalised.
///
/// Built with `TryFrom<&ClientRecord>`; on failure the full
/// [`ValidationResult`] is returned so every problem can be shown at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedClient {
    #[serde(rename = "clave")]
    pub key: ClientKey,
    #[serde(rename = "nombre")]
    pub name: ClientName,
    #[serde(rename = "correo")]
    pub email: EmailAddress,
    #[serde(rename = "telefono")]
    pub phone: PhoneNumber,
}

impl TryFrom<&ClientRecord> for ValidatedClient {
    type Error = ValidationResult;

    fn try_from(record: &ClientRecord) -> Result<Self, Self::Error> {
        let key = ClientKey::new(&record.key);
        let name = ClientName::new(&record.name);
        let email = EmailAddress::new(&record.email);
        let phone = PhoneNumber::new(&record.phone);

        match (key, name, email, phone) {
            (Ok(key), Ok(name), Ok(email), Ok(phone)) => Ok(Self {
                key,
                name,
                email,
                phone,
            }),
            (key, name, email, phone) => Err([
                (ClientField::Key, key.err()),
                (ClientField::Name, name.err()),
                (ClientField::Email, email.err()),
                (ClientField::Phone, phone.err()),
            ]
            .into_iter()
            .filter_map(|(field, err)| err.map(|err| (field, err)))
            .collect()),
        }
    }
}

impl TryFrom<ClientRecord> for ValidatedClient {
    type Error = ValidationResult;

    fn try_from(record: ClientRecord) -> Result<Self, Self::Error> {
        Self::try_from(&record)
    }
}

impl From<ValidatedClient> for ClientRecord {
    fn from(client: ValidatedClient) -> Self {
        ClientRecord {
            key: client.key.into_inner(),
            name: client.name.into_inner(),
            email: client.email.into_inner(),
            phone: client.phone.formatted(),
        }
    }
}
