//! Linked-stage resolution: qualified names, reference targets,
//! hierarchy linearisation and member lookup.

use rustc_hash::FxHashSet;
use smol_str::format_smolstr;
use tracing::trace;

use crate::base::{Name, NodeId};
use crate::model::{Category, Kind, Linked, Node};

use super::environment::Environment;
use super::error::ResolveError;

impl Environment {
    /// Fully qualified, dot-separated name of an entity. Cached.
    pub fn fully_qualified_name(&self, id: NodeId) -> Result<Name, ResolveError> {
        self.fqn_by_id
            .try_get_or_update(id, || self.compute_fqn(id))
    }

    fn compute_fqn(&self, id: NodeId) -> Result<Name, ResolveError> {
        let node = self.node(id)?;
        let label: Name = match node.as_singleton() {
            Some(singleton) => match &singleton.name {
                Some(name) => name.clone(),
                None => {
                    // Anonymous singletons are named after the module
                    // they inherit from, disambiguated by id.
                    let superclass = node
                        .superclass()
                        .ok_or_else(|| ResolveError::unresolved(id.to_string()))?;
                    let target = self.target(superclass)?;
                    let super_fqn = self.fully_qualified_name(target.id)?;
                    format_smolstr!("{super_fqn}#{id}")
                }
            },
            None => {
                let name = node
                    .name()
                    .ok_or_else(|| ResolveError::unresolved(id.to_string()))?;
                Name::from(name.replace(".#", ""))
            }
        };
        match self.parent(id) {
            Ok(parent) if parent.is(Kind::Package) => {
                let parent_fqn = self.fully_qualified_name(parent.id)?;
                Ok(format_smolstr!("{parent_fqn}.{label}"))
            }
            _ => Ok(label),
        }
    }

    /// The node at a fully qualified name: the segment before the
    /// first dot names a top-level package, the rest is a qualified
    /// name inside it. Cached.
    pub fn node_by_fqn(&self, fqn: &str) -> Result<&Node<Linked>, ResolveError> {
        let id = self.id_by_fqn.try_get_or_update(Name::from(fqn), || {
            let (head, tail) = fqn.split_once('.').unwrap_or((fqn, ""));
            let package = self
                .members()
                .iter()
                .find(|m| m.is(Kind::Package) && m.name() == Some(head))
                .ok_or_else(|| ResolveError::unresolved(fqn))?;
            if tail.is_empty() {
                Ok(package.id)
            } else {
                self.node_by_qn(package, tail).map(|node| node.id)
            }
        })?;
        self.node(id)
    }

    /// Resolve a qualified name relative to a package. A `#` segment
    /// carries a node id and resolves directly through the id index;
    /// otherwise each dot-separated step descends to the entity child
    /// with that name.
    pub fn node_by_qn<'a>(
        &'a self,
        package: &'a Node<Linked>,
        qn: &str,
    ) -> Result<&'a Node<Linked>, ResolveError> {
        if let Some((_, raw_id)) = qn.split_once('#') {
            let id = raw_id
                .parse()
                .map_err(|_| ResolveError::unresolved(qn))?;
            return self.node(id);
        }
        let mut current = package;
        for step in qn.split('.') {
            current = current
                .members()
                .iter()
                .find(|m| m.is(Category::Entity) && m.name() == Some(step))
                .ok_or_else(|| ResolveError::unresolved(qn))?;
        }
        Ok(current)
    }

    /// Resolution target of a linked reference: the head segment goes
    /// through the reference scope, the tail (possibly empty) is a
    /// qualified name under the scoped node.
    pub fn target<'a>(
        &'a self,
        reference: &'a Node<Linked>,
    ) -> Result<&'a Node<Linked>, ResolveError> {
        let r = reference
            .as_reference()
            .ok_or_else(|| ResolveError::unresolved(reference.kind().to_string()))?;
        let (head, tail) = r.name.split_once('.').unwrap_or((r.name.as_str(), ""));
        let base_id = r
            .scope
            .get(head)
            .copied()
            .ok_or_else(|| ResolveError::unresolved(r.name.as_str()))?;
        let base = self.node(base_id)?;
        if tail.is_empty() {
            Ok(base)
        } else {
            self.node_by_qn(base, tail)
        }
    }

    /// Linearised ancestry of a module: the module itself, its mixins
    /// in declared order with their own ancestors inlined, then the
    /// superclass chain. Every id appears once.
    pub fn hierarchy(&self, module_id: NodeId) -> Result<Vec<&Node<Linked>>, ResolveError> {
        let modules = self.linearise(module_id, &FxHashSet::default())?;
        let mut seen = FxHashSet::default();
        let modules: Vec<_> = modules
            .into_iter()
            .filter(|module| seen.insert(module.id))
            .collect();
        trace!(module = %module_id, size = modules.len(), "linearised hierarchy");
        Ok(modules)
    }

    fn linearise(
        &self,
        module_id: NodeId,
        excluded: &FxHashSet<NodeId>,
    ) -> Result<Vec<&Node<Linked>>, ResolveError> {
        if excluded.contains(&module_id) {
            return Ok(Vec::new());
        }
        let module = self.node(module_id)?;

        let mut parents = Vec::new();
        for mixin in module.mixins() {
            parents.push(self.target(mixin)?);
        }
        if !module.is(Kind::Mixin) {
            if let Some(superclass) = module.superclass() {
                parents.push(self.target(superclass)?);
            }
        }

        let mut modules = vec![module];
        let mut exclusions = excluded.clone();
        exclusions.insert(module_id);
        for parent in parents {
            modules.extend(self.linearise(parent.id, &exclusions)?);
            exclusions.insert(parent.id);
        }
        Ok(modules)
    }

    /// Whether `other` appears in the module's hierarchy.
    pub fn inherits(&self, module_id: NodeId, other: NodeId) -> Result<bool, ResolveError> {
        Ok(self.hierarchy(module_id)?.iter().any(|m| m.id == other))
    }

    /// First method in the hierarchy with the given name that is
    /// concrete (has a body) or native, and matches the arity.
    pub fn lookup_method(
        &self,
        module_id: NodeId,
        name: &str,
        arity: usize,
    ) -> Result<Option<&Node<Linked>>, ResolveError> {
        for module in self.hierarchy(module_id)? {
            for member in module.members() {
                let Some(method) = member.as_method() else {
                    continue;
                };
                if method.name == name
                    && (method.body.is_some() || method.is_native)
                    && method.matches_arity(arity)
                {
                    trace!(module = %module.id, name, arity, "method lookup hit");
                    return Ok(Some(member));
                }
            }
        }
        trace!(module = %module_id, name, arity, "method lookup miss");
        Ok(None)
    }

    /// Constructor of the class itself matching the arity.
    /// Constructors are not inherited.
    pub fn lookup_constructor(
        &self,
        class_id: NodeId,
        arity: usize,
    ) -> Result<Option<&Node<Linked>>, ResolveError> {
        let class = self.node(class_id)?;
        Ok(class.members().iter().find(|member| {
            member
                .as_constructor()
                .is_some_and(|constructor| constructor.matches_arity(arity))
        }))
    }
}
