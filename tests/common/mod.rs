#![allow(dead_code)]

use git2::{Commit, Oid, Repository, RepositoryInitOptions, Signature};
use tempfile::TempDir;

/// Fresh repository whose initial branch is `branch`
pub fn init_repo(branch: &str) -> (TempDir, Repository) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut opts = RepositoryInitOptions::new();
    opts.initial_head(branch);
    let repo = Repository::init_opts(dir.path(), &opts).expect("Failed to init repository");
    (dir, repo)
}

fn signature() -> Signature<'static> {
    Signature::now("Test Author", "test@example.com").expect("Failed to create signature")
}

/// Commit the (empty) index on top of HEAD
pub fn commit(repo: &Repository, message: &str) -> Oid {
    let sig = signature();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    let parents: Vec<Commit> = match repo.head() {
        Ok(head) => vec![head.peel_to_commit().unwrap()],
        Err(_) => Vec::new(),
    };
    let parent_refs: Vec<&Commit> = parents.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .expect("Failed to commit")
}

/// Create an annotated tag at `oid`
pub fn annotated_tag(repo: &Repository, name: &str, oid: Oid) {
    let object = repo.find_object(oid, None).unwrap();
    repo.tag(name, &object, &signature(), &format!("Release {}", name), false)
        .expect("Failed to tag");
}
