//! Outbound URL construction.
//!
//! | Function               | Result                                                   |
//! |------------------------|----------------------------------------------------------|
//! | [`build_redirect_url`] | `<origin>/<slug>/thank-you`                              |
//! | [`build_payment_url`]  | `<provider>/<recipient>?tokens=..&chains=..&redirectURL=..` |
//! | [`page_url`]           | `<site>/<slug>` (shareable payment page)                 |
//! | [`payment_link`]       | redirect + payment URL for a whole [`Configuration`]     |
//! | [`share_links`]        | Twitter / Facebook intents for a page URL                |
//!
//! Nothing here touches the network.

use url::Url;

use crate::error::{LinkError, LinkResult};
use crate::models::{Configuration, PaymentOptions};

const THANK_YOU_SEGMENT: &str = "thank-you";

fn parse_base(base: &str) -> LinkResult<Url> {
    let url = Url::parse(base.trim()).map_err(|source| LinkError::InvalidBase {
        url: base.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(LinkError::CannotBeABase(base.to_string()));
    }
    Ok(url)
}

fn required<'a>(value: &'a str, missing: LinkError) -> LinkResult<&'a str> {
    let value = value.trim().trim_matches('/');
    if value.is_empty() {
        Err(missing)
    } else {
        Ok(value)
    }
}

/// Absolute thank-you URL for `slug`, on the origin of `base`.
///
/// Any path, query or fragment on `base` is dropped.
///
/// ```
/// use paypage::build_redirect_url;
///
/// let url = build_redirect_url("https://host", "alice").unwrap();
/// assert!(url.as_str().ends_with("/alice/thank-you"));
/// ```
pub fn build_redirect_url(base: &str, slug: &str) -> LinkResult<Url> {
    let slug = required(slug, LinkError::MissingSlug)?;
    let mut url = parse_base(base)?;

    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| LinkError::CannotBeABase(base.to_string()))?
        .clear()
        .push(slug)
        .push(THANK_YOU_SEGMENT);

    Ok(url)
}

/// Provider URL for paying `recipient`.
///
/// `tokens` and `chains` are added only when non-empty; `redirectURL`
/// is always present.
pub fn build_payment_url(
    provider: &str,
    recipient: &str,
    options: Option<&PaymentOptions>,
    redirect: &Url,
) -> LinkResult<Url> {
    let recipient = required(recipient, LinkError::MissingRecipient)?;
    let mut url = parse_base(provider)?;

    url.path_segments_mut()
        .map_err(|_| LinkError::CannotBeABase(provider.to_string()))?
        .pop_if_empty()
        .push(recipient);

    {
        let mut query = url.query_pairs_mut();
        if let Some(options) = options {
            let tokens = options.token_list();
            if !tokens.is_empty() {
                query.append_pair("tokens", &tokens.join(","));
            }
            let chains = options.chain_list();
            if !chains.is_empty() {
                query.append_pair("chains", &chains.join(","));
            }
        }
        query.append_pair("redirectURL", redirect.as_str());
    }

    Ok(url)
}

/// Shareable address of the payment page.
pub fn page_url(site: &str, slug: &str) -> LinkResult<Url> {
    let slug = required(slug, LinkError::MissingSlug)?;
    let mut url = parse_base(site)?;

    url.path_segments_mut()
        .map_err(|_| LinkError::CannotBeABase(site.to_string()))?
        .pop_if_empty()
        .push(slug);

    Ok(url)
}

/// Redirect and payment URLs resolved together.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentLink {
    pub redirect: Url,
    pub payment: Url,
}

/// Build the full payment link for `config`.
///
/// `route_slug` wins over the stored slug when the page was reached
/// through a `/<slug>` route.
pub fn payment_link(
    config: &Configuration,
    provider: &str,
    origin: &str,
    route_slug: Option<&str>,
) -> LinkResult<PaymentLink> {
    let slug = route_slug.filter(|s| !s.is_empty()).unwrap_or(&config.slug);
    let redirect = build_redirect_url(origin, slug)?;
    let payment = build_payment_url(
        provider,
        &config.recipient,
        config.payment_options.as_ref(),
        &redirect,
    )?;
    Ok(PaymentLink { redirect, payment })
}

const TWITTER_INTENT: &str = "https://twitter.com/intent/tweet";
const FACEBOOK_SHARER: &str = "https://www.facebook.com/sharer/sharer.php";

/// Social share intents for a payment page.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareLinks {
    pub twitter: Url,
    pub facebook: Url,
}

/// Share intents pointing at `page`, mentioning `recipient` in the tweet text.
pub fn share_links(page: &Url, recipient: &str) -> LinkResult<ShareLinks> {
    let text = format!("I just made a payment to {}!", recipient.trim());
    let twitter = Url::parse_with_params(TWITTER_INTENT, &[("text", text.as_str()), ("url", page.as_str())])
        .map_err(|source| LinkError::InvalidBase {
            url: TWITTER_INTENT.to_string(),
            source,
        })?;
    let facebook = Url::parse_with_params(FACEBOOK_SHARER, &[("u", page.as_str())]).map_err(|source| {
        LinkError::InvalidBase {
            url: FACEBOOK_SHARER.to_string(),
            source,
        }
    })?;
    Ok(ShareLinks { twitter, facebook })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_url() {
        let url = build_redirect_url("https://host", "alice").unwrap();
        assert_eq!(url.as_str(), "https://host/alice/thank-you");

        // Only the origin of the base is kept
        let url = build_redirect_url("https://host:8443/some/page?x=1#top", "alice").unwrap();
        assert_eq!(url.as_str(), "https://host:8443/alice/thank-you");
    }

    #[test]
    fn test_redirect_url_errors() {
        assert_eq!(build_redirect_url("https://host", "  "), Err(LinkError::MissingSlug));
        assert!(matches!(
            build_redirect_url("not a url", "alice"),
            Err(LinkError::InvalidBase { .. })
        ));
        assert_eq!(
            build_redirect_url("mailto:me@host", "alice"),
            Err(LinkError::CannotBeABase("mailto:me@host".into()))
        );
    }

    #[test]
    fn test_payment_url_full() {
        let redirect = build_redirect_url("https://pay.example", "vitalik").unwrap();
        let options = PaymentOptions {
            tokens: Some("USDC,DAI".into()),
            chains: Some("base".into()),
            ..Default::default()
        };

        let url = build_payment_url("https://yodl.me", "vitalik.eth", Some(&options), &redirect).unwrap();
        assert_eq!(
            url.as_str(),
            "https://yodl.me/vitalik.eth?tokens=USDC%2CDAI&chains=base&redirectURL=https%3A%2F%2Fpay.example%2Fvitalik%2Fthank-you"
        );

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[2], ("redirectURL".into(), "https://pay.example/vitalik/thank-you".into()));
    }

    #[test]
    fn test_payment_url_skips_empty_sets() {
        let redirect = build_redirect_url("https://pay.example", "bob").unwrap();
        let options = PaymentOptions {
            tokens: Some(String::new()),
            ..Default::default()
        };

        let url = build_payment_url("https://yodl.me/", "bob.eth", Some(&options), &redirect).unwrap();
        let keys: Vec<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
        assert_eq!(keys, vec!["redirectURL"]);
        assert_eq!(url.path(), "/bob.eth");
    }

    #[test]
    fn test_payment_url_encodes_recipient() {
        let redirect = build_redirect_url("https://pay.example", "x").unwrap();
        let url = build_payment_url("https://yodl.me", "a b/c", None, &redirect).unwrap();
        assert_eq!(url.path(), "/a%20b%2Fc");

        assert_eq!(
            build_payment_url("https://yodl.me", "", None, &redirect),
            Err(LinkError::MissingRecipient)
        );
    }

    #[test]
    fn test_page_url() {
        let url = page_url("https://dob3y-yapp.netlify.app", "alice").unwrap();
        assert_eq!(url.as_str(), "https://dob3y-yapp.netlify.app/alice");
    }

    #[test]
    fn test_payment_link_prefers_route_slug() {
        let config = Configuration {
            recipient: "alice.eth".into(),
            slug: "alice".into(),
            ..Default::default()
        };
        let link = payment_link(&config, "https://yodl.me", "https://pay.example", Some("tips")).unwrap();
        assert_eq!(link.redirect.as_str(), "https://pay.example/tips/thank-you");

        let link = payment_link(&config, "https://yodl.me", "https://pay.example", None).unwrap();
        assert_eq!(link.redirect.as_str(), "https://pay.example/alice/thank-you");
        assert!(link.payment.as_str().starts_with("https://yodl.me/alice.eth?"));
    }

    #[test]
    fn test_share_links() {
        let page = page_url("https://pay.example", "alice").unwrap();
        let links = share_links(&page, "alice.eth").unwrap();

        let pairs: Vec<(String, String)> = links.twitter.query_pairs().into_owned().collect();
        assert_eq!(pairs[0], ("text".into(), "I just made a payment to alice.eth!".into()));
        assert_eq!(pairs[1], ("url".into(), "https://pay.example/alice".into()));
        assert_eq!(
            links.facebook.as_str(),
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fpay.example%2Falice"
        );
    }
}
