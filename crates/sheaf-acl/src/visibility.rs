use crate::model::{AudienceSelector, Facet, ListScope, ViewerContext};
use sheaf_types::FacetId;
use time::OffsetDateTime;

fn audience_matches(ctx: &ViewerContext<'_>, audience: &AudienceSelector) -> bool {
    match audience {
        AudienceSelector::Everyone => true,
        AudienceSelector::Role { role } => ctx.has_role(role),
        AudienceSelector::List {
            list_id,
            scope: ListScope::Dynamic,
        } => ctx.in_list(list_id),
        // Frozen membership is authoritative; the live list is not consulted.
        AudienceSelector::List {
            scope: ListScope::Snapshot { members, .. },
            ..
        } => members.contains(&ctx.id),
        AudienceSelector::Users { ids, .. } => ids.contains(&ctx.id),
    }
}

/// Whether a single facet is currently visible to the viewer: the expiry
/// gate applies first and unconditionally, then the audience match.
pub fn facet_visible_to(ctx: &ViewerContext<'_>, now: OffsetDateTime, facet: &Facet) -> bool {
    !facet.is_expired(now) && audience_matches(ctx, &facet.audience)
}

/// The subset of `facets` visible to the viewer, in input order. Callers
/// may show several matching facets simultaneously; this is not
/// "pick one".
///
/// There is no failure mode: a viewer with no roles and a false-returning
/// membership lookup simply sees only the `Everyone` facets.
pub fn visible_facets<'f>(
    ctx: &ViewerContext<'_>,
    now: OffsetDateTime,
    facets: &'f [Facet],
) -> Vec<&'f Facet> {
    facets
        .iter()
        .filter(|f| facet_visible_to(ctx, now, f))
        .collect()
}

/// The single facet shown by default. The author's explicit choice wins
/// whenever it is visible; otherwise the highest specificity rank, with
/// ties broken by earliest `created_at` and then by facet id so that
/// identical input always yields the same winner.
pub fn default_facet<'f>(
    ctx: &ViewerContext<'_>,
    now: OffsetDateTime,
    facets: &'f [Facet],
    author_default: Option<&FacetId>,
) -> Option<&'f Facet> {
    let visible = visible_facets(ctx, now, facets);

    if let Some(id) = author_default
        && let Some(chosen) = visible.iter().copied().find(|f| f.id == *id)
    {
        return Some(chosen);
    }

    visible.into_iter().max_by(|a, b| {
        a.priority_rank
            .cmp(&b.priority_rank)
            .then_with(|| b.created_at.cmp(&a.created_at))
            .then_with(|| b.id.cmp(&a.id))
    })
}
