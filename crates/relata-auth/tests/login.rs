use relata_auth::directory::{Credential, CredentialDirectory};
use relata_auth::error::AuthError;

#[test]
fn valid_pair_returns_display_name() {
    let directory = CredentialDirectory::seeded();
    let user = directory
        .authenticate("maria@psicoiapro.com", "maria123")
        .unwrap();
    assert_eq!(user.display_name, "Maria Silva");
    assert_eq!(user.email, "maria@psicoiapro.com");
}

#[test]
fn wrong_password_is_rejected() {
    let directory = CredentialDirectory::seeded();
    let err = directory
        .authenticate("maria@psicoiapro.com", "senha_errada")
        .unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);
}

#[test]
fn unknown_email_gets_the_same_rejection() {
    let directory = CredentialDirectory::seeded();
    let err = directory
        .authenticate("ninguem@psicoiapro.com", "maria123")
        .unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);
}

#[test]
fn injected_entries_are_honoured() {
    let directory = CredentialDirectory::from_entries([(
        "ana@clinica.com".to_string(),
        Credential {
            password: "segredo".to_string(),
            display_name: "Ana Lima".to_string(),
        },
    )]);

    let user = directory.authenticate("ana@clinica.com", "segredo").unwrap();
    assert_eq!(user.display_name, "Ana Lima");

    // Seeded accounts do not leak into an injected directory.
    assert!(
        directory
            .authenticate("maria@psicoiapro.com", "maria123")
            .is_err()
    );
}
