//! Argument vectors for heaver invocations
//!
//! Every function returns a freshly allocated vector. The first element is the
//! name the tool is invoked as (`argv[0]`), the rest are its arguments, e.g.
//!
//! ```text
//! heaver -CSn <name> [-i <image>]* [--raw-key <key>] --net <interface>
//! heaver -Sn|-Tn|-Dn <name>
//! heaver -L
//! heaver-img -Qj
//! ```
use crate::action::Action;
use crate::error::ErrInvalidName;

const HEAVER: &str = "heaver";
const HEAVER_IMG: &str = "heaver-img";
const CREATE_FLAG: &str = "-CSn";
const IMAGE_FLAG: &str = "-i";
const RAW_KEY_FLAG: &str = "--raw-key";
const NET_FLAG: &str = "--net";
const LIST_FLAG: &str = "-L";
const QUERY_JSON_FLAG: &str = "-Qj";

/// Bridge new containers are attached to unless configured otherwise
pub const DEFAULT_NET_INTERFACE: &str = "br0";

type Result<T> = std::result::Result<T, ErrInvalidName>;

pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        Err(ErrInvalidName::Empty)?;
    }
    Ok(())
}

/// Arguments creating (and starting) a container from `images`, base layer first.
/// The raw key flag is only emitted for a non-empty `key`.
pub fn create<S: AsRef<str>>(
    name: &str,
    images: &[S],
    key: &str,
    net_interface: &str,
) -> Result<Vec<String>> {
    validate_name(name)?;

    let mut args = Vec::with_capacity(5 + images.len() * 2 + 2);
    args.push(HEAVER.to_owned());
    args.push(CREATE_FLAG.to_owned());
    args.push(name.to_owned());
    for image in images {
        args.push(IMAGE_FLAG.to_owned());
        args.push(image.as_ref().to_owned());
    }
    if !key.is_empty() {
        args.push(RAW_KEY_FLAG.to_owned());
        args.push(key.to_owned());
    }
    args.push(NET_FLAG.to_owned());
    args.push(net_interface.to_owned());

    Ok(args)
}

pub fn control(name: &str, action: Action) -> Result<Vec<String>> {
    validate_name(name)?;
    Ok(vec![
        HEAVER.to_owned(),
        action.flag().to_owned(),
        name.to_owned(),
    ])
}

pub fn list_containers() -> Vec<String> {
    vec![HEAVER.to_owned(), LIST_FLAG.to_owned()]
}

pub fn list_images() -> Vec<String> {
    vec![HEAVER_IMG.to_owned(), QUERY_JSON_FLAG.to_owned()]
}
