//! Operations contract document template.
//!
//! Bound variables: `step_id`, `step_name`, `slug`.

pub(super) const NAME: &str = "operations";

pub(super) const TEMPLATE: &str = r#"# {step_id} — {step_name}

## 1. Purpose

This document defines the operational contract for {step_id}.

It specifies:

- The goal and scope of this STEP.
- The responsibilities and constraints.
- The validation requirements.
- The STEP-specific Definition of Done.

This STEP MUST be executed under the Agentic Workflow governance
(Planner → Implementer → Reviewer) and MUST NOT violate existing ADRs.

---

## 2. Scope

### 2.1 In Scope

- TODO: describe what this STEP is responsible for.

### 2.2 Out of Scope

- TODO: explicitly list what this STEP must NOT do.
- Any responsibility owned by other STEPs MUST be listed here.

---

## 3. Architectural Context

This STEP MUST be consistent with:

- ADR-001..ADR-014 (where applicable).
- docs/governance/DEFINITION-OF-DONE-TEMPLATE.md
- docs/operations/AGENTIC-WORKFLOW-PLAYBOOK.md
- docs/operations/STEP-RESPONSIBILITY-MATRIX.md

You MUST explicitly list which ADRs are relevant for this STEP:

- TODO: e.g. ADR-002, ADR-009, ADR-014

Any new structural decision introduced by this STEP
MUST be covered by a new ADR.

---

## 4. Execution Requirements

The Planner Agent SHOULD produce a plan that includes:

- A clear sequence of operations for this STEP.
- Any required changes to the codebase or docs.
- Validation steps (commands, checks).
- Explicit references to relevant ADRs and governance docs.

The Implementer Agent SHOULD:

- Follow the approved plan.
- Keep changes strictly within the STEP scope.
- Avoid scope creep into responsibilities of other STEPs.
- Produce a DoD self-assessment at the end.

---

## 5. Constraints

During this STEP, the following constraints MUST be respected:

- No violation of existing ADRs.
- No bypass of architectural layering.
- No introduction of secrets in the codebase.
- No cross-STEP responsibilities.

If any constraint conflicts with the required changes,
a new ADR MUST be proposed before proceeding.

---

## 6. Validation

Validation MUST include:

- TODO: list validation commands and checks for this STEP.
  - For example:
    - python -m mypy backend
    - python -m flake8 backend
    - python backend/manage.py check

- Manual review of:
  - Architectural alignment
  - Security implications
  - Multi-tenancy impact
  - Observability hooks (if relevant)

Validation for this STEP MUST NOT include checks
belonging to future or previous STEPs, as defined in
docs/operations/STEP-RESPONSIBILITY-MATRIX.md.

---

## 7. Definition of Done — {step_id}

{step_id} is considered complete when ALL the following conditions are met.

### 7.1 STEP-Specific Outcomes

- TODO: list the concrete outcomes that must exist after this STEP.
  - e.g. directory structure, configuration files, interfaces, etc.

### 7.2 Technical Validation

- All validation commands defined in Section 6 succeed.
- No new P1 issues have been introduced by this STEP.
- Any remaining warnings are documented and classified as P2 (non-blocking).

### 7.3 Governance Alignment

- No ADR violations have been detected.
- No architectural layering violations exist.
- No secrets are committed to the repository.
- No responsibilities of other STEPs have been taken over.

### 7.4 Documentation

- This document ({step_id}-{slug}.md) is up to date.
- Relevant sections of:
  - STEP-RESPONSIBILITY-MATRIX.md
  - OPERATIONAL-PROMPT-SEQUENCE.md
have been updated, if needed.

{step_id} MUST NOT be marked as DONE
until all the above conditions are satisfied.
"#;
