/// Credential list algorithms
///
/// Both functions take the list by value and return the new list; the caller
/// builds a replacement `User` from the result.
use pitstop_core::types::{CredentialId, ProviderCredential};

/// Add `credential` as the last entry
pub fn append_credential(
    mut credentials: Vec<ProviderCredential>,
    credential: ProviderCredential,
) -> Vec<ProviderCredential> {
    credentials.push(credential);
    credentials
}

/// Remove every credential whose id is `id`, then append `replacement`
///
/// The replacement always ends up last, even when the removed entry sat
/// earlier in the list. An `id` that matches nothing (or `None`) removes
/// nothing, so the call degrades to an append. Duplicated ids are all removed.
pub fn replace_credential(
    credentials: Vec<ProviderCredential>,
    id: Option<&CredentialId>,
    replacement: ProviderCredential,
) -> Vec<ProviderCredential> {
    let mut kept: Vec<ProviderCredential> = match id {
        Some(id) => credentials
            .into_iter()
            .filter(|c| c.id.as_ref() != Some(id))
            .collect(),
        None => credentials,
    };

    kept.push(replacement);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitstop_core::types::ProviderKind;

    fn credential(id: Option<&str>, token: &str) -> ProviderCredential {
        ProviderCredential {
            id: id.map(CredentialId::new),
            provider: ProviderKind::GitHub,
            email: Some("a@x.com".to_string()),
            api_token: Some(token.to_string()),
            full_name: None,
        }
    }

    #[test]
    fn replace_moves_credential_to_end() {
        let list = vec![
            credential(Some("c1"), "old"),
            credential(Some("c2"), "other"),
        ];

        let result = replace_credential(list, Some(&CredentialId::new("c1")), credential(None, "new"));

        assert_eq!(result, vec![credential(Some("c2"), "other"), credential(None, "new")]);
    }

    #[test]
    fn replace_removes_all_duplicates() {
        let list = vec![
            credential(Some("c1"), "a"),
            credential(Some("c1"), "b"),
            credential(None, "stub"),
        ];

        let result = replace_credential(list, Some(&CredentialId::new("c1")), credential(None, "new"));

        assert_eq!(result, vec![credential(None, "stub"), credential(None, "new")]);
    }

    #[test]
    fn replace_unknown_id_only_appends() {
        let list = vec![credential(Some("c1"), "a")];

        let result = replace_credential(list.clone(), Some(&CredentialId::new("zz")), credential(None, "new"));

        assert_eq!(result.len(), list.len() + 1);
        assert_eq!(result[0], list[0]);
    }

    #[test]
    fn replace_without_id_never_removes_unset_ids() {
        let list = vec![credential(None, "stub")];

        let result = replace_credential(list, None, credential(None, "new"));

        assert_eq!(result, vec![credential(None, "stub"), credential(None, "new")]);
    }

    #[test]
    fn append_adds_last() {
        let result = append_credential(vec![credential(None, "stub")], credential(Some("c1"), "t"));
        assert_eq!(result.last(), Some(&credential(Some("c1"), "t")));
        assert_eq!(result.len(), 2);
    }
}
