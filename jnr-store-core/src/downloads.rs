//! Download section of the detail page, as plain data.

use crate::record::{GameRecord, NOT_AVAILABLE};

/// Which kind of download an option offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadKind {
    Direct,
    Mirror,
    Parts,
    Torrent,
}

/// One button in the download section.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadOption<'a> {
    pub kind: DownloadKind,
    pub label: String,
    /// `None` for the parts button, which opens the part list instead.
    pub url: Option<&'a str>,
    pub size: Option<String>,
}

/// One entry of the multi-part list.
#[derive(Debug, Clone, PartialEq)]
pub struct PartEntry<'a> {
    /// 1-based part number.
    pub number: usize,
    pub url: &'a str,
    pub size: &'a str,
}

/// Everything the download section shows for one game.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadSummary<'a> {
    /// Direct size, else first part size, else "N/A".
    pub setup_size: &'a str,
    pub options: Vec<DownloadOption<'a>>,
    pub parts: Vec<PartEntry<'a>>,
    pub rar_password: Option<&'a str>,
    pub online_fix_password: Option<&'a str>,
}

impl<'a> DownloadSummary<'a> {
    pub fn for_record(game: &'a GameRecord) -> Self {
        let links = &game.download_links;
        let mut options = Vec::new();

        if let Some((direct, url)) = links
            .direct
            .as_ref()
            .and_then(|d| d.url.as_deref().map(|url| (d, url)))
        {
            options.push(DownloadOption {
                kind: DownloadKind::Direct,
                label: direct.name.clone().unwrap_or_else(|| "Direct Download".into()),
                url: Some(url),
                size: direct.size.clone(),
            });
        }

        for mirror in &links.additional_direct_links {
            if let Some(url) = mirror.url.as_deref() {
                options.push(DownloadOption {
                    kind: DownloadKind::Mirror,
                    label: mirror.name.clone().unwrap_or_else(|| "Mirror Link".into()),
                    url: Some(url),
                    size: mirror.size.clone(),
                });
            }
        }

        let mut parts = Vec::new();
        if !links.parts.is_empty() {
            options.push(DownloadOption {
                kind: DownloadKind::Parts,
                label: "Download Parts".into(),
                url: None,
                size: Some(format!("{} Parts", links.parts.len())),
            });
            for (i, part) in links.parts.iter().enumerate() {
                if let Some(url) = part.url.as_deref() {
                    parts.push(PartEntry {
                        number: i + 1,
                        url,
                        size: part.size.as_deref().unwrap_or(NOT_AVAILABLE),
                    });
                }
            }
        }

        if let Some((torrent, url)) = links
            .torrent
            .as_ref()
            .and_then(|t| t.url.as_deref().map(|url| (t, url)))
        {
            options.push(DownloadOption {
                kind: DownloadKind::Torrent,
                label: "Torrent Download".into(),
                url: Some(url),
                size: torrent.size.clone(),
            });
        }

        let setup_size = links
            .direct
            .as_ref()
            .and_then(|l| l.size.as_deref())
            .or_else(|| links.parts.first().and_then(|l| l.size.as_deref()))
            .unwrap_or(NOT_AVAILABLE);

        Self {
            setup_size,
            options,
            parts,
            rar_password: game.rar_password.as_deref(),
            online_fix_password: game.online_fix_rar_password.as_deref(),
        }
    }

    /// True when there is at least one usable link.
    pub fn has_links(&self) -> bool {
        !self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{DownloadLink, DownloadLinks};

    #[test]
    fn empty_links_have_no_options() {
        let game = GameRecord::new("g", "Game");
        let summary = DownloadSummary::for_record(&game);
        assert!(!summary.has_links());
        assert_eq!(summary.setup_size, "N/A");
        assert!(summary.parts.is_empty());
    }

    #[test]
    fn options_follow_section_order() {
        let mut game = GameRecord::new("g", "Game");
        game.download_links = DownloadLinks {
            direct: Some(DownloadLink::new("https://dl/direct", "4 GB")),
            additional_direct_links: vec![DownloadLink {
                name: Some("Mirror A".into()),
                url: Some("https://dl/mirror".into()),
                size: None,
            }],
            parts: vec![
                DownloadLink::new("https://dl/p1", "2 GB"),
                DownloadLink {
                    name: None,
                    url: None,
                    size: Some("2 GB".into()),
                },
            ],
            torrent: Some(DownloadLink::new("magnet:?xt", "4 GB")),
        };
        game.rar_password = Some("jnr".into());

        let summary = DownloadSummary::for_record(&game);
        let kinds: Vec<_> = summary.options.iter().map(|o| o.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DownloadKind::Direct,
                DownloadKind::Mirror,
                DownloadKind::Parts,
                DownloadKind::Torrent
            ]
        );
        assert_eq!(summary.options[0].label, "Direct Download");
        assert_eq!(summary.options[1].label, "Mirror A");
        assert_eq!(summary.options[2].size.as_deref(), Some("2 Parts"));
        // second part has no url
        assert_eq!(summary.parts.len(), 1);
        assert_eq!(summary.parts[0].number, 1);
        assert_eq!(summary.setup_size, "4 GB");
        assert_eq!(summary.rar_password, Some("jnr"));
    }

    #[test]
    fn setup_size_ignores_torrent() {
        let mut game = GameRecord::new("g", "Game");
        game.download_links.torrent = Some(DownloadLink::new("magnet:?xt", "9 GB"));
        let summary = DownloadSummary::for_record(&game);
        assert_eq!(summary.setup_size, "N/A");
        assert_eq!(summary.options.len(), 1);
    }
}
