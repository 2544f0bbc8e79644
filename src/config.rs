/// Region code shown while the lookup endpoint only echoes the caller IP.
pub const DEFAULT_REGION: &str = "us-east-1";

pub fn get_ip_echo_url() -> &'static str {
    "https://checkip.amazonaws.com/"
}
