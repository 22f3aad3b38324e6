use solana_security_txt::security_txt;

security_txt! {
    name: "Capability Forwarder program",
    project_url: "https://github.com/staked-token/capability-forwarder",
    contacts: "email:security@staked-token.dev",
    policy: "https://github.com/staked-token/capability-forwarder/blob/main/SECURITY.md",
    source_code: "https://github.com/staked-token/capability-forwarder"
}
