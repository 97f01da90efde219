//! Discovery runs against fake probing, resolution and address tables.

use devsync_core::ProcessOutput;
use devsync_core::discovery::sweep::ADDRESS_TABLE_TIMEOUT;
use devsync_core::discovery::{DiscoveredHost, Discovery, DiscoverySource};
use devsync_test_utils::{FakeProber, FakeResolver, ScriptedRunner, disable_colors, write_known_hosts};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const BANNER: &str = "SSH-2.0-OpenSSH_9.6";

const ARP_OUTPUT: &str = "\
box (192.168.1.5) at 1a:2b:3c:4d:5e:6f on en0 ifscope [ethernet]
? (192.168.1.6) at 1a:2b:3c:4d:5e:70 on en0 ifscope [ethernet]
? (224.0.0.251) at 1:0:5e:0:0:fb on en0 ifscope permanent [ethernet]
";

fn render(report: &devsync_core::DiscoveryReport) -> String {
    let mut out: Vec<u8> = Vec::new();
    report.render(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_unreachable_trusted_host_is_reported_without_sweeping() {
    disable_colors();
    let temp = TempDir::new().unwrap();
    let known_hosts = write_known_hosts(temp.path(), &["10.0.0.9 ssh-rsa AAAAB3NzaC1yc2E"]);
    let prober = FakeProber::new();
    let resolver = FakeResolver::new();
    let runner = ScriptedRunner::new();

    let report = Discovery::new(&known_hosts, &prober, &resolver, &runner).discover();

    assert_eq!(report.source, DiscoverySource::Trusted);
    assert_eq!(
        report.hosts,
        vec![DiscoveredHost {
            address: "10.0.0.9".into(),
            label: "10.0.0.9".into(),
            reachable: false,
            banner: None,
        }]
    );
    assert!(runner.calls().is_empty());
    assert_eq!(
        render(&report),
        "Trusted ssh-rsa hosts (from known_hosts):\n\n  10.0.0.9    SSH: unreachable\n"
    );
}

#[test]
fn test_trusted_hosts_are_deduplicated_in_file_order() {
    let temp = TempDir::new().unwrap();
    let known_hosts = write_known_hosts(
        temp.path(),
        &[
            "alpha,10.0.0.2 ssh-rsa AAAA",
            "# alpha again below, on another port",
            "[alpha]:2222,beta ssh-rsa AAAA",
            "gamma ssh-ed25519 AAAA",
        ],
    );
    let prober = FakeProber::new().with_banner("beta", BANNER);
    let resolver = FakeResolver::new();
    let runner = ScriptedRunner::new();

    let report = Discovery::new(&known_hosts, &prober, &resolver, &runner).discover();

    let addresses: Vec<&str> = report.hosts.iter().map(|h| h.address.as_str()).collect();
    assert_eq!(addresses, vec!["alpha", "10.0.0.2", "beta"]);
    assert_eq!(prober.probed(), vec!["alpha", "10.0.0.2", "beta"]);
    assert!(report.hosts[2].reachable);
    assert_eq!(report.hosts[2].banner.as_deref(), Some(BANNER));
}

#[test]
fn test_trusted_hosts_are_labeled_with_resolved_names() {
    disable_colors();
    let temp = TempDir::new().unwrap();
    let known_hosts = write_known_hosts(temp.path(), &["10.0.0.7,10.0.0.8 ssh-rsa AAAA"]);
    let prober = FakeProber::new().with_banner("10.0.0.7", BANNER);
    let resolver = FakeResolver::new()
        .with_name("10.0.0.7", "nas.lan")
        .with_name("10.0.0.8", "10.0.0.8");
    let runner = ScriptedRunner::new();

    let report = Discovery::new(&known_hosts, &prober, &resolver, &runner).discover();

    assert_eq!(
        render(&report),
        "Trusted ssh-rsa hosts (from known_hosts):\n\n  10.0.0.7 (nas.lan)    SSH: SSH-2.0-OpenSSH_9.6\n  10.0.0.8    SSH: unreachable\n"
    );
}

#[test]
fn test_sweep_reports_only_responding_hosts() {
    disable_colors();
    let temp = TempDir::new().unwrap();
    let known_hosts = temp.path().join("known_hosts");
    let prober = FakeProber::new().with_banner("192.168.1.5", BANNER);
    let resolver = FakeResolver::new().with_name("192.168.1.5", "box.lan");
    let runner = ScriptedRunner::new().respond(ProcessOutput::ok(ARP_OUTPUT));

    let report = Discovery::new(&known_hosts, &prober, &resolver, &runner).discover();

    assert_eq!(report.source, DiscoverySource::Sweep { candidates: 2 });
    assert_eq!(prober.probed(), vec!["192.168.1.5", "192.168.1.6"]);
    assert_eq!(report.hosts.len(), 1);

    let expected = "\
No trusted ssh-rsa hosts found in known_hosts.
Scanning local network for SSH services...

  192.168.1.5 (box.lan)
    SSH-2.0-OpenSSH_9.6

1 host(s) with SSH open. Connect with:
  ssh user@<host>   (to add to known_hosts)
  devsync scan      (to verify)
";
    let text = render(&report);
    assert_eq!(text, expected);
    assert!(!text.contains("192.168.1.6"));
}

#[test]
fn test_sweep_uses_address_table_listing() {
    let temp = TempDir::new().unwrap();
    let known_hosts = temp.path().join("known_hosts");
    let prober = FakeProber::new();
    let resolver = FakeResolver::new();
    let runner = ScriptedRunner::new().respond(ProcessOutput::ok(ARP_OUTPUT));

    Discovery::new(&known_hosts, &prober, &resolver, &runner).discover();

    assert_eq!(runner.calls(), vec![("arp".to_string(), vec!["-a".to_string()])]);
    assert_eq!(runner.timeouts(), vec![Some(ADDRESS_TABLE_TIMEOUT)]);
}

#[test]
fn test_stalled_address_table_yields_empty_sweep() {
    disable_colors();
    let temp = TempDir::new().unwrap();
    let known_hosts = temp.path().join("known_hosts");
    let prober = FakeProber::new();
    let resolver = FakeResolver::new();
    let runner = ScriptedRunner::new().time_out();

    let report = Discovery::new(&known_hosts, &prober, &resolver, &runner).discover();

    assert_eq!(report.source, DiscoverySource::Sweep { candidates: 0 });
    assert!(report.hosts.is_empty());
    assert!(prober.probed().is_empty());
    assert!(render(&report).contains("No hosts found in ARP table."));
}

#[test]
fn test_sweep_with_no_responders() {
    disable_colors();
    let temp = TempDir::new().unwrap();
    let known_hosts = temp.path().join("known_hosts");
    let prober = FakeProber::new();
    let resolver = FakeResolver::new();
    let runner = ScriptedRunner::new().respond(ProcessOutput::ok(ARP_OUTPUT));

    let report = Discovery::new(&known_hosts, &prober, &resolver, &runner).discover();

    let text = render(&report);
    assert!(report.hosts.is_empty());
    assert!(text.contains("No SSH services found on local network."));
    assert!(!text.contains("Connect with"));
}

#[test]
fn test_missing_address_table_tool_is_not_fatal() {
    disable_colors();
    let temp = TempDir::new().unwrap();
    let known_hosts = temp.path().join("known_hosts");
    let prober = FakeProber::new();
    let resolver = FakeResolver::new();
    let runner = ScriptedRunner::new().missing_program();

    let report = Discovery::new(&known_hosts, &prober, &resolver, &runner).discover();

    assert_eq!(report.source, DiscoverySource::Sweep { candidates: 0 });
    assert!(prober.probed().is_empty());
    assert!(render(&report).contains("No hosts found in ARP table."));
}

#[test]
fn test_other_key_families_fall_back_to_sweep() {
    let temp = TempDir::new().unwrap();
    let known_hosts = write_known_hosts(temp.path(), &["[host]:2222 ssh-ed25519 AAAA"]);
    let prober = FakeProber::new();
    let resolver = FakeResolver::new();
    let runner = ScriptedRunner::new();

    let report = Discovery::new(&known_hosts, &prober, &resolver, &runner).discover();

    assert!(matches!(report.source, DiscoverySource::Sweep { .. }));
    assert_eq!(runner.calls().len(), 1);
}

#[test]
fn test_key_family_can_be_chosen() {
    let temp = TempDir::new().unwrap();
    let known_hosts = write_known_hosts(temp.path(), &["[host]:2222 ssh-ed25519 AAAA"]);
    let prober = FakeProber::new();
    let resolver = FakeResolver::new();
    let runner = ScriptedRunner::new();

    let report = Discovery::new(&known_hosts, &prober, &resolver, &runner)
        .with_key_family("ssh-ed25519")
        .discover();

    assert_eq!(report.source, DiscoverySource::Trusted);
    assert_eq!(report.key_family, "ssh-ed25519");
    assert_eq!(report.hosts[0].address, "host");
}
