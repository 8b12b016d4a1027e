use linkhub_runtime::HubView;
use linkhub_types::Link;

use crate::presentation::view_models::{LinkListViewModel, LinkViewModel, PageViewModel};

pub fn present_link(link: &Link) -> LinkViewModel {
    LinkViewModel {
        id: link.id,
        title: link.title.clone(),
        url: link.url.clone(),
        icon: link.icon.to_string(),
        symbol: link.icon.symbol(),
        description: link.description.clone(),
        tags: link.tags().to_vec(),
    }
}

pub fn present_link_list(
    view: &HubView<'_>,
    total: usize,
    load_error: Option<&str>,
) -> LinkListViewModel {
    LinkListViewModel {
        links: view.links.iter().map(|link| present_link(link)).collect(),
        page: PageViewModel {
            number: view.page.number,
            total_pages: view.page.total_pages,
            paged: view.page.paged,
        },
        matches: view.matches,
        total,
        query: view.query.to_string(),
        theme: view.theme.id.to_string(),
        load_error: load_error.map(str::to_string),
    }
}
