use anyhow::Result;
use chart_verifier::commands::report::{self, ReportArgs};
use chart_verifier::commands::verify::{self, VerifyArgs};

use super::types::{Commands, VerifyCommand};

pub fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Verify(args) => verify::execute(args.into()),
        Commands::Report {
            kind,
            report_path,
            set,
            set_values,
            output,
            write_to_file,
        } => report::execute(ReportArgs {
            kind,
            report_path,
            set,
            set_values,
            output,
            write_to_file,
        }),
    }
}

impl From<VerifyCommand> for VerifyArgs {
    fn from(cmd: VerifyCommand) -> Self {
        VerifyArgs {
            chart_uri: cmd.chart_uri,
            enable: cmd.enable,
            disable: cmd.disable,
            chart_set: cmd.chart_set,
            chart_set_file: cmd.chart_set_file,
            chart_set_string: cmd.chart_set_string,
            chart_values: cmd.chart_values,
            set: cmd.set,
            set_values: cmd.set_values,
            openshift_version: cmd.openshift_version,
            timeout: cmd.timeout,
            provider_delivery: cmd.provider_delivery,
            suppress_error_log: cmd.suppress_error_log,
            output: cmd.output,
            write_to_file: cmd.write_to_file,
            kube_apiserver: cmd.kube_apiserver,
            kube_as_user: cmd.kube_as_user,
            kube_as_group: cmd.kube_as_group,
            kube_ca_file: cmd.kube_ca_file,
            kube_context: cmd.kube_context,
            kube_token: cmd.kube_token,
            kubeconfig: cmd.kubeconfig,
            namespace: cmd.namespace,
            registry_config: cmd.registry_config,
            repository_config: cmd.repository_config,
            repository_cache: cmd.repository_cache,
        }
    }
}
