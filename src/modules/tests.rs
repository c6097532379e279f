use super::{AttackModule, ExternalModuleHost, ModuleHost};
use crate::config::Config;
use crate::config::models::DEFAULT_GTP_COMMAND;
use crate::errors::Error;
use std::collections::HashMap;

fn host_with(module: AttackModule, command: &str) -> ExternalModuleHost {
    let mut commands = HashMap::new();
    commands.insert(module, command.to_string());
    ExternalModuleHost { commands }
}

#[test]
fn module_names_match_menu_labels() {
    assert_eq!(AttackModule::Ss7.to_string(), "SS7");
    assert_eq!(AttackModule::Gtp.to_string(), "GTP");
    assert_eq!(AttackModule::Diameter.to_string(), "Diameter");
    assert_eq!(AttackModule::Sip.as_ref(), "SIP");
}

#[test]
fn from_config_binds_only_loadable_modules() {
    let host = ExternalModuleHost::from_config(&Config::default());
    assert_eq!(host.command_for(AttackModule::Gtp), Some(DEFAULT_GTP_COMMAND));
    assert!(host.command_for(AttackModule::Diameter).is_none());
    assert!(host.command_for(AttackModule::Sip).is_none());
}

#[test]
fn unconfigured_module_is_unavailable() {
    let mut host = ExternalModuleHost::default();
    match host.launch(AttackModule::Ss7) {
        Err(Error::ModuleUnavailable { module, reason }) => {
            assert_eq!(module, "SS7");
            assert_eq!(reason, "no command configured");
        }
        other => panic!("expected unavailable, got {other:?}"),
    }
}

#[test]
fn missing_program_is_unavailable() {
    let mut host = host_with(AttackModule::Gtp, "sigploit-no-such-module-binary");
    match host.launch(AttackModule::Gtp) {
        Err(Error::ModuleUnavailable { module, reason }) => {
            assert_eq!(module, "GTP");
            assert!(reason.contains("sigploit-no-such-module-binary"));
        }
        other => panic!("expected unavailable, got {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn successful_program_completes_normally() {
    let mut host = host_with(AttackModule::Ss7, "true");
    host.launch(AttackModule::Ss7).unwrap();
}

#[cfg(unix)]
#[test]
fn failing_program_reports_exit_status() {
    let mut host = host_with(AttackModule::Ss7, "false");
    match host.launch(AttackModule::Ss7) {
        Err(Error::Module { module, cause }) => {
            assert_eq!(module, "SS7");
            assert_eq!(cause, "'false' exited with status 1");
        }
        other => panic!("expected module failure, got {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn command_arguments_are_passed_through() {
    let mut host = host_with(AttackModule::Gtp, "test 1 -eq 1");
    host.launch(AttackModule::Gtp).unwrap();

    let mut host = host_with(AttackModule::Gtp, "test 1 -eq 2");
    assert!(matches!(
        host.launch(AttackModule::Gtp),
        Err(Error::Module { .. })
    ));
}
