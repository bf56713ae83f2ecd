//! Single release lookup, for checking IDs before putting them in the catalog.

use tokio::runtime::Runtime;

use crate::config::Config;
use crate::enrichment::{ExternalRelease, RELEASE_INCLUDES, join_artists};
use crate::error::Error;

use super::build_client;

/// Look up one release and print the data enrichment would take from it
pub fn cmd_lookup(rt: &Runtime, config: &Config, release_id: &str) -> anyhow::Result<()> {
    let client = build_client(config, None)?;
    let policy = config.retry.to_policy()?;

    let release = rt
        .block_on(policy.retry(|| client.fetch_release(release_id, RELEASE_INCLUDES)))
        .map_err(|e| Error::from_retry(release_id, e))?;

    print!("{}", describe(&release));
    Ok(())
}

/// Plain-text summary of a release as enrichment would use it
fn describe(release: &ExternalRelease) -> String {
    let mut out = String::new();
    out.push_str(&format!("Title:  {}\n", release.title));
    out.push_str(&format!("Artist: {}\n", join_artists(&release.artist_names)));
    out.push_str(&format!("Media:  {}\n", release.media.len()));

    match release.media.first() {
        Some(medium) => {
            if release.media.len() > 1 {
                out.push_str("Only the first medium is used:\n");
            }
            for track in &medium.tracks {
                out.push_str(&format!("  {:>4}  {}\n", track.number, track.recording_title));
            }
        }
        None => out.push_str("No media - a catalog record would keep its own data\n"),
    }

    out.push_str(&format!(
        "\nMusicBrainz: https://musicbrainz.org/release/{}\n",
        release.id
    ));
    out
}
