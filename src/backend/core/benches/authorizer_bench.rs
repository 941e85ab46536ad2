//! Benchmarks for route authorization and access decisions.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;
use talentgate_core::access::{AccessGuard, AccessRequest, RedirectTargets};
use talentgate_core::rbac::{PolicyTable, PredefinedRole, Principal, PrincipalKind, RouteAuthorizer};

const PATHS: &[&str] = &["/dashboard", "/dashboard/admin", "/dashboard/jobs", "/dashboard/settings", "/jobs/42/ats"];

fn principal(role: PredefinedRole) -> Principal {
    Principal::new("bench", "bench@example.com", PrincipalKind::Internal, vec![role.to_role()])
}

fn bench_can_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("authorizer_can_access");
    let authz = RouteAuthorizer::new(Arc::new(PolicyTable::recruitment_defaults()));
    for role in [PredefinedRole::SuperAdmin, PredefinedRole::Admin, PredefinedRole::HiringManager] {
        let p = principal(role);
        group.bench_with_input(BenchmarkId::from_parameter(role.name()), &p, |b, p| {
            b.iter(|| { for path in PATHS { black_box(authz.can_access(p, path)); } });
        });
    }
    group.finish();
}

fn bench_guard_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("guard_evaluate");
    let guard = AccessGuard::new(RouteAuthorizer::new(Arc::new(PolicyTable::recruitment_defaults())), RedirectTargets::default());
    let internal = principal(PredefinedRole::InternalRecruiter);
    let external = Principal::new("ext", "ext@example.com", PrincipalKind::External, vec![PredefinedRole::ExternalRecruiter.to_role()]);
    let requests: Vec<AccessRequest> = PATHS.iter().map(|p| AccessRequest::new(*p).with_permission_check()).collect();
    for (label, p) in [("anonymous", None), ("internal", Some(&internal)), ("external", Some(&external))] {
        group.throughput(Throughput::Elements(requests.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(label), &p, |b, p| {
            b.iter(|| { for r in &requests { black_box(guard.evaluate(*p, r)); } });
        });
    }
    group.finish();
}

fn bench_principal_construction(c: &mut Criterion) {
    let roles: Vec<_> = PredefinedRole::all().into_iter().map(|r| r.to_role()).collect();
    c.bench_function("principal_construction", |b| {
        b.iter(|| black_box(Principal::new("bench", "bench@example.com", PrincipalKind::Internal, roles.clone())));
    });
}

criterion_group!(benches, bench_can_access, bench_guard_evaluate, bench_principal_construction);
criterion_main!(benches);
