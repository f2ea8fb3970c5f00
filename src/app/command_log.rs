//! Protokoll der ausgeführten Commands.
//!
//! Der Controller trägt jeden Command vor der Ausführung ein. Integrationstests
//! prüfen darüber, welche Mutationen ein Intent ausgelöst hat; im Betrieb dient
//! es der Diagnose (z.B. welcher Moduswechsel eine Neuverteilung ausgelöst hat).

use super::AppCommand;

/// Obergrenze; bei Erreichen wird die ältere Hälfte verworfen.
const MAX_LOGGED_COMMANDS: usize = 1000;

/// Ausgeführte Commands in Ausführungsreihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    /// Erstellt ein leeres Protokoll.
    pub fn new() -> Self {
        Self::default()
    }

    /// Trägt einen Command ein.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= MAX_LOGGED_COMMANDS {
            self.entries.drain(..MAX_LOGGED_COMMANDS / 2);
        }
        self.entries.push(command.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Alle Einträge, ältester zuerst.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last()
    }
}
