use crate::db::remove_database;
use crate::error::Result;
use crate::models::User;
use crate::settings::Settings;
use crate::store::LedgerStore;
use crate::views::ViewId;

/// Answers collected by the setup stages until the profile is written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetupDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: Option<String>,
    pub occupation: Option<String>,
    /// Net of the sample bundle, set once the bank link step has seeded it.
    pub seeded_balance: Option<f64>,
}

impl SetupDraft {
    pub fn profile(&self) -> User {
        User {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            date_of_birth: self.date_of_birth.clone(),
            occupation: self.occupation.clone(),
            balance: self.seeded_balance.unwrap_or(0.0),
        }
    }
}

/// State shared by every view: the ledger, the settings it was opened from
/// and the in-progress setup answers.
pub struct AppContext {
    pub store: LedgerStore,
    pub settings: Settings,
    pub setup: SetupDraft,
}

impl AppContext {
    pub fn open(settings: Settings) -> Result<Self> {
        std::fs::create_dir_all(settings.data_path())?;
        let store = LedgerStore::open(&settings.db_path())?;
        Ok(Self {
            store,
            settings,
            setup: SetupDraft::default(),
        })
    }

    /// Main when a profile exists, Welcome otherwise.
    pub fn initial_view(&self) -> ViewId {
        if self.store.get_user().is_some() {
            ViewId::Main
        } else {
            ViewId::Welcome
        }
    }

    /// Remove the database and start over with an empty one.
    pub fn delete_all_data(&mut self) -> Result<()> {
        // Release the file before deleting it.
        self.store = LedgerStore::open_in_memory()?;
        let path = self.settings.db_path();
        remove_database(&path)?;
        self.store = LedgerStore::open(&path)?;
        self.setup = SetupDraft::default();
        tracing::info!(path = %path.display(), "deleted all data");
        Ok(())
    }
}

/// A context over a fresh database in a temporary directory.
#[cfg(test)]
pub(crate) fn temp_context() -> (tempfile::TempDir, AppContext) {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings {
        data_dir: dir.path().join("data").to_string_lossy().to_string(),
        ..Settings::default()
    };
    let ctx = AppContext::open(settings).unwrap();
    (dir, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, NewTransaction};

    #[test]
    fn test_initial_view_follows_profile() {
        let (_dir, ctx) = temp_context();
        assert_eq!(ctx.initial_view(), ViewId::Welcome);
        ctx.store.set_user(&SetupDraft::default().profile());
        assert_eq!(ctx.initial_view(), ViewId::Main);
    }

    #[test]
    fn test_delete_all_data_leaves_empty_store() {
        let (_dir, mut ctx) = temp_context();
        ctx.store.set_user(&SetupDraft::default().profile());
        ctx.store.add_transaction(&NewTransaction::new("a", 1.0, Category::Health));
        ctx.setup.first_name = "Ada".to_string();

        ctx.delete_all_data().unwrap();

        assert!(ctx.store.get_user().is_none());
        assert!(ctx.store.list_transactions().is_empty());
        assert_eq!(ctx.setup, SetupDraft::default());
        assert!(ctx.settings.db_path().exists());
        assert_eq!(ctx.initial_view(), ViewId::Welcome);
    }

    #[test]
    fn test_profile_uses_seeded_balance() {
        let draft = SetupDraft {
            first_name: "Ada".to_string(),
            seeded_balance: Some(-93_917.12),
            ..SetupDraft::default()
        };
        assert_eq!(draft.profile().balance, -93_917.12);
        assert_eq!(SetupDraft::default().profile().balance, 0.0);
    }
}
